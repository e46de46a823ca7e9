use std::time::Duration;

/// Default Ollama base URL for local instances.
pub const DEFAULT_OLLAMA_HOST: &str = "http://localhost:11434";

/// Default model used for generation.
pub const DEFAULT_MODEL: &str = "llama3.2";

/// Default timeout for a single generation call, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Settings for the model client, built once at startup and passed in explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    /// Base URL of the Ollama server.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Timeout applied to the whole outbound call.
    pub timeout: Duration,
}

impl ModelConfig {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OLLAMA_HOST, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS)
    }
}
