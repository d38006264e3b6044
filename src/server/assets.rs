//! Embedded dashboard bundle and health endpoint.

use axum::{
    body::Body,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};

const INDEX: &str = "index.html";

// Trunk fingerprints every asset except the page itself.
const HASHED_CACHE: &str = "public, max-age=31536000, immutable";
const INDEX_CACHE: &str = "no-cache";

pub async fn healthz() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok", "version": env!("CARGO_PKG_VERSION")}))
}

/// Serve the compiled dashboard. Paths that are not part of the bundle get
/// `index.html` so a reload on any URL still boots the app.
pub async fn serve_frontend(uri: Uri) -> impl IntoResponse {
    let requested = uri.path().trim_start_matches('/');

    let (path, file) = match Assets::get(requested) {
        Some(file) if !requested.is_empty() => (requested, file),
        _ => match Assets::get(INDEX) {
            Some(file) => (INDEX, file),
            None => return StatusCode::NOT_FOUND.into_response(),
        },
    };

    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let cache = if path == INDEX { INDEX_CACHE } else { HASHED_CACHE };

    Response::builder()
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CACHE_CONTROL, cache)
        .body(Body::from(file.data.into_owned()))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

#[derive(rust_embed::Embed)]
#[folder = "dist"]
#[include = "*.html"]
#[include = "*.js"]
#[include = "*.css"]
#[include = "*.wasm"]
struct Assets;
