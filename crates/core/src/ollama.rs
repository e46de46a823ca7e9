use serde::{Deserialize, Serialize};

/// Request body for Ollama's `/api/generate` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OllamaGenerateRequest {
    pub model: String,
    pub prompt: String,
    /// Always `false`: the whole reply is returned in a single object.
    pub stream: bool,
}

impl OllamaGenerateRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
        }
    }
}

/// Non-streaming response from Ollama's `/api/generate` endpoint.
///
/// Only the generated text is used; a body without `response` reads as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OllamaGenerateResponse {
    #[serde(default)]
    pub response: String,
}

/// Build the `/api/generate` URL for an Ollama base URL.
pub fn generate_url(base_url: &str) -> String {
    format!("{}/api/generate", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_url() {
        assert_eq!(
            generate_url("http://localhost:11434"),
            "http://localhost:11434/api/generate"
        );
    }

    #[test]
    fn test_generate_url_trailing_slash() {
        assert_eq!(
            generate_url("http://gpu-box:11434/"),
            "http://gpu-box:11434/api/generate"
        );
    }

    #[test]
    fn test_request_serialization() {
        let value = serde_json::to_value(OllamaGenerateRequest::new("llama3.2", "hello")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "model": "llama3.2", "prompt": "hello", "stream": false })
        );
    }

    #[test]
    fn test_response_ignores_extra_fields() {
        let response: OllamaGenerateResponse = serde_json::from_value(serde_json::json!({
            "model": "llama3.2",
            "created_at": "2024-09-25T12:00:00Z",
            "response": "{\"files\": []}",
            "done": true,
            "eval_count": 12
        }))
        .unwrap();

        assert_eq!(response.response, "{\"files\": []}");
    }

    #[test]
    fn test_response_without_text_is_empty() {
        let response: OllamaGenerateResponse =
            serde_json::from_value(serde_json::json!({ "done": true })).unwrap();
        assert_eq!(response.response, "");
    }
}
