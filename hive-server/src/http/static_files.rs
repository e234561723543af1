//! Static file serving for the embedded web form

use axum::{
    body::Body,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

/// Embedded web assets (compiled into the binary)
#[derive(RustEmbed)]
#[folder = "assets/"]
struct WebAssets;

/// Handler for serving static files from embedded assets
///
/// Any path that doesn't match a real file falls back to index.html, so
/// the form is reachable at `/`.
pub async fn static_handler(uri: Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/');

    if let Some(response) = serve_file(path) {
        return response;
    }

    serve_file("index.html")
        .unwrap_or_else(|| (StatusCode::NOT_FOUND, "Web form not found").into_response())
}

/// Serve a file from embedded assets
fn serve_file(path: &str) -> Option<Response<Body>> {
    let file = WebAssets::get(path)?;

    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .body(Body::from(file.data.into_owned()))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_html_is_embedded() {
        assert!(WebAssets::get("index.html").is_some());
    }

    #[test]
    fn unknown_asset_is_none() {
        assert!(serve_file("missing.js").is_none());
    }
}
