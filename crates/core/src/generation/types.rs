use serde::{Deserialize, Serialize};

/// A single file produced by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// Relative POSIX path inside the project root.
    pub path: String,
    /// Full text content of the file.
    pub content: String,
}

impl FileDescriptor {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Parsed model output: the generated files plus whatever metadata the model attached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    #[serde(default)]
    pub files: Vec<FileDescriptor>,
    #[serde(default)]
    pub meta: serde_json::Map<String, serde_json::Value>,
}

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Body of `POST /api/write`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteRequest {
    #[serde(rename = "rootDir")]
    pub root_dir: String,
    pub files: Vec<FileDescriptor>,
}

/// Result of a successful write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteOutcome {
    pub status: String,
    pub written: usize,
}

impl WriteOutcome {
    pub fn ok(written: usize) -> Self {
        Self {
            status: "ok".to_string(),
            written,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_request_uses_camel_case_root_dir() {
        let request: WriteRequest = serde_json::from_value(serde_json::json!({
            "rootDir": "generated_project",
            "files": [{ "path": "a.txt", "content": "hi" }]
        }))
        .unwrap();

        assert_eq!(request.root_dir, "generated_project");
        assert_eq!(request.files, vec![FileDescriptor::new("a.txt", "hi")]);
    }

    #[test]
    fn test_generate_request_context_is_optional() {
        let request: GenerateRequest =
            serde_json::from_value(serde_json::json!({ "prompt": "todo app" })).unwrap();

        assert_eq!(request.prompt, "todo app");
        assert!(request.context.is_none());
    }

    #[test]
    fn test_write_outcome_serialization() {
        let value = serde_json::to_value(WriteOutcome::ok(3)).unwrap();
        assert_eq!(value, serde_json::json!({ "status": "ok", "written": 3 }));
    }

    #[test]
    fn test_empty_generation_result_serialization() {
        let value = serde_json::to_value(GenerationResult::default()).unwrap();
        assert_eq!(value, serde_json::json!({ "files": [], "meta": {} }));
    }
}
