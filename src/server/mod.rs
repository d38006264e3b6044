//! Static host for the compiled dashboard.
//!
//! The browser talks to the inference backend directly; this server only
//! ships the embedded `dist/` bundle and answers health checks.

pub mod assets;

use std::net::SocketAddr;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Configuration for the web server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Build the Axum router with all routes.
pub fn build_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(assets::healthz))
        // Frontend: serve embedded static files
        .fallback(assets::serve_frontend)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Start the server on the given address.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let app = build_router();

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("BreathScan dashboard at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
