//! HTTP surface: `POST /check_url`, `POST /check_text`, `GET /health`.

mod handlers;

pub use handlers::{CheckTextRequest, CheckUrlRequest, ErrorBody};

use crate::config::ServerConfig;
use crate::service::InferenceService;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the router over a loaded service.
pub fn router(service: InferenceService, config: &ServerConfig) -> Router {
    let app = Router::new()
        .route("/check_url", post(handlers::check_url))
        .route("/check_text", post(handlers::check_text))
        .route("/health", get(handlers::health))
        .with_state(service)
        .layer(TraceLayer::new_for_http());
    if config.cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

/// Bind and serve until Ctrl-C.
pub async fn serve(service: InferenceService, config: &ServerConfig) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, router(service, config))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler failed; shutting down");
    }
    tracing::info!("shutdown requested");
}
