//! HTTP route handlers for the studio API.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use vibestudio_core::generation::{GenerateRequest, GenerationResult, WriteOutcome, WriteRequest};

use crate::error::Error;
use crate::ollama::OllamaClient;

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub client: Arc<OllamaClient>,
}

impl AppState {
    pub fn new(client: OllamaClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

/// Build the API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/generate", post(generate))
        .route("/write", post(write))
}

async fn health() -> &'static str {
    "ok"
}

/// POST /api/generate - prompt in, generated files out.
async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerationResult>, Error> {
    log::info!("generate: prompt_len={}", request.prompt.len());

    let result =
        crate::generate::generate_data(&state.client, &request.prompt, request.context.as_deref())
            .await?;

    Ok(Json(result))
}

/// POST /api/write - write files under `rootDir`.
async fn write(Json(request): Json<WriteRequest>) -> Result<Json<WriteOutcome>, Error> {
    log::info!(
        "write: root={} files={}",
        request.root_dir,
        request.files.len()
    );

    let outcome = crate::write::write_files(PathBuf::from(request.root_dir), request.files).await?;

    Ok(Json(outcome))
}
