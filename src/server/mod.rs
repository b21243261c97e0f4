//! HTTP API for the gazetteer.

mod handlers;
mod state;
mod static_files;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use state::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::gazetteer::Gazetteer;

/// Runtime settings for the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Front-end assets. Only the API is mounted when unset.
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5000,
            static_dir: None,
        }
    }
}

pub fn build_router(gazetteer: Gazetteer, static_dir: Option<&std::path::Path>) -> Router {
    let state = Arc::new(AppState { gazetteer });

    let router = Router::new()
        .route("/api/search", get(handlers::search))
        .route("/api/geocode", post(handlers::geocode))
        .route("/api/reverse-geocode", get(handlers::reverse_geocode))
        .route("/api/directions", get(handlers::directions))
        .route("/api/popular-locations", get(handlers::popular_locations))
        .route("/api/feedback", post(handlers::submit_feedback))
        .route("/api/health", get(handlers::health));

    let router = match static_dir {
        Some(dir) => router.fallback_service(static_files::service(dir)),
        None => router,
    };

    router.layer(CorsLayer::permissive()).with_state(state)
}

pub async fn start(config: &ServerConfig) -> anyhow::Result<()> {
    let gazetteer = Gazetteer::builtin();
    let locations = gazetteer.count();
    let app = build_router(gazetteer, config.static_dir.as_deref());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", config.host, config.port))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("cannot bind to {}", addr))?;

    tracing::info!(%addr, locations, "gazetteer server listening on http://{}", addr);
    match &config.static_dir {
        Some(dir) => tracing::info!(dir = %dir.display(), "serving static assets"),
        None => tracing::info!("no static directory configured, API only"),
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("cannot listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
