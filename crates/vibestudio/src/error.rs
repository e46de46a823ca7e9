use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use vibestudio_core::generation::SanitizeError;
use vibestudio_core::workspace::PathEscape;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The model endpoint was unreachable, timed out or answered with an error.
    #[error("Ollama error: {0}")]
    Upstream(String),

    /// The model reply was not the expected JSON shape.
    #[error("{0}")]
    MalformedOutput(String),

    /// A write target resolved outside the root directory.
    #[error("{0}")]
    PathEscape(String),

    /// The filesystem refused a write.
    #[error("Write error: {0}")]
    Write(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Upstream(_) => StatusCode::BAD_GATEWAY,
            Error::MalformedOutput(_) | Error::Write(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::PathEscape(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<SanitizeError> for Error {
    fn from(err: SanitizeError) -> Self {
        Error::MalformedOutput(err.to_string())
    }
}

impl From<PathEscape> for Error {
    fn from(err: PathEscape) -> Self {
        Error::PathEscape(err.to_string())
    }
}

/// Error body in the `{"detail": "..."}` shape the front-end reads.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            log::error!("{status}: {self}");
        } else {
            log::warn!("{status}: {self}");
        }

        let body = ErrorBody {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
