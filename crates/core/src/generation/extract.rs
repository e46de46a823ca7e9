use super::types::GenerationResult;

const FENCE: &str = "```";

/// Reasons a model reply could not be turned into a [`GenerationResult`].
#[derive(Debug, thiserror::Error)]
pub enum SanitizeError {
    #[error("Model returned non-JSON output: {0}")]
    InvalidJson(serde_json::Error),

    #[error("Model returned JSON that is not an object")]
    NotAnObject,

    #[error("Model returned JSON with an unexpected shape: {0}")]
    InvalidShape(serde_json::Error),
}

/// Strip a markdown code fence wrapping the model reply.
///
/// Only replies that *start* with a fence are unwrapped. The text between the
/// opening and the closing fence is returned, without the language tag that
/// may follow the opening fence (```` ```json ````). When the closing fence is
/// missing the whole trimmed reply is returned unchanged.
pub fn strip_fences(response: &str) -> &str {
    let trimmed = response.trim();

    let Some(after_open) = trimmed.strip_prefix(FENCE) else {
        return trimmed;
    };

    let Some(end) = after_open.find(FENCE) else {
        return trimmed;
    };

    let inner = &after_open[..end];
    let inner = match inner.split_once('\n') {
        Some((tag, rest)) if is_language_tag(tag) => rest,
        _ => inner,
    };

    inner.trim()
}

fn is_language_tag(line: &str) -> bool {
    line.trim()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '.'))
}

/// Parse a raw model reply into a [`GenerationResult`].
///
/// The reply must be a JSON object once fences are stripped. `files` and
/// `meta` default to empty when absent; any element of `files` missing
/// `path` or `content` fails the whole parse. No partial result is returned.
pub fn parse_generation(response: &str) -> Result<GenerationResult, SanitizeError> {
    let text = strip_fences(response);

    let value: serde_json::Value =
        serde_json::from_str(text).map_err(SanitizeError::InvalidJson)?;

    if !value.is_object() {
        return Err(SanitizeError::NotAnObject);
    }

    serde_json::from_value(value).map_err(SanitizeError::InvalidShape)
}
