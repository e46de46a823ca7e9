use crate::prelude::*;
use vibestudio_core::config::{ModelConfig, DEFAULT_MODEL, DEFAULT_OLLAMA_HOST, DEFAULT_TIMEOUT_SECS};
use vibestudio_core::ollama::{generate_url, OllamaGenerateRequest, OllamaGenerateResponse};

/// Model endpoint flags shared by every subcommand that talks to Ollama.
#[derive(Debug, Clone, clap::Args)]
pub struct ModelArgs {
    /// Ollama base URL
    #[clap(long, env = "OLLAMA_HOST", default_value = DEFAULT_OLLAMA_HOST)]
    pub ollama_host: String,

    /// Model name for code generation
    #[clap(long, env = "MODEL_NAME", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Timeout for the model call, in seconds
    #[clap(long, env = "OLLAMA_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

impl From<ModelArgs> for ModelConfig {
    fn from(args: ModelArgs) -> Self {
        ModelConfig::new(args.ollama_host, args.model, args.timeout)
    }
}

/// Thin client for Ollama's non-streaming `/api/generate` endpoint.
///
/// One attempt per call: no retries, no backoff.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: reqwest::Client,
    config: ModelConfig,
}

impl OllamaClient {
    pub fn new(config: ModelConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Send `prompt` to the model and return the generated text.
    pub async fn generate(&self, prompt: &str) -> Result<String, Error> {
        let url = generate_url(&self.config.base_url);
        let request = OllamaGenerateRequest::new(&self.config.model, prompt);

        log::debug!(
            "POST {url} model={} prompt_len={}",
            self.config.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Upstream(format!("HTTP {status}: {body}")));
        }

        let data: OllamaGenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::Upstream(format!("Failed to parse response: {e}")))?;

        log::debug!("Ollama replied with {} chars", data.response.len());

        Ok(data.response)
    }
}
