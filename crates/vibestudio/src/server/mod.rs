mod cli;
mod routes;

pub use cli::ServeOptions;
pub use routes::{api_router, AppState};

use crate::ollama::OllamaClient;
use crate::prelude::{eprintln, *};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

/// Build the full application: `/api/*` routes with a permissive CORS layer.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api_router())
        .layer(cors)
        .with_state(state)
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let client = OllamaClient::new(options.model.into())?;

    let addr = format!("{}:{}", options.host, options.port);

    if global.verbose {
        eprintln!("Ollama URL: {}", client.config().base_url);
        eprintln!("Model: {}", client.config().model);
        eprintln!("Generate endpoint: http://{}/api/generate", addr);
        eprintln!("Write endpoint: http://{}/api/write", addr);
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("vibestudio listening on http://{addr}");

    axum::serve(listener, app(AppState::new(client)))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}
