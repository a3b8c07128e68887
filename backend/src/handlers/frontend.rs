//! Static frontend bundle
//!
//! Resolution order for a request that no API route claims:
//! 1. a regular file at `<static-root>/<path>`, content type from the extension
//! 2. `<static-root>/index.html`, so client-side routes load the app
//! 3. `{"status": "backend running"}`
//!
//! Paths with `..` segments never resolve to a file and go straight to 2/3.

use axum::{
    body::Body,
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};
use tracing::debug;

use crate::models::StatusResponse;
use crate::AppState;

pub const INDEX_DOCUMENT: &str = "index.html";

/// Router fallback for every path outside the API
pub async fn serve_frontend(State(state): State<AppState>, req: Request) -> Response {
    let static_root = state.config.static_root.as_path();

    // ServeDir consumes the request; keep what the index fallback needs
    let index_req = bodiless_copy(&req);

    let files = ServeDir::new(static_root).append_index_html_on_directories(false);
    let response = match files.oneshot(req).await {
        Ok(response) => response,
        Err(never) => match never {},
    };

    // Anything but "not found" (a file, 304, 405, range errors) goes out as is
    if response.status() != StatusCode::NOT_FOUND {
        return response.into_response();
    }

    let index_path = static_root.join(INDEX_DOCUMENT);
    let has_index = tokio::fs::metadata(&index_path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false);

    if has_index {
        debug!("Serving {} for {}", INDEX_DOCUMENT, index_req.uri().path());
        return match ServeFile::new(index_path).oneshot(index_req).await {
            Ok(response) => response.into_response(),
            Err(never) => match never {},
        };
    }

    Json(StatusResponse {
        status: "backend running".to_string(),
    })
    .into_response()
}

fn bodiless_copy(req: &Request) -> Request {
    let mut copy = Request::new(Body::empty());
    *copy.method_mut() = req.method().clone();
    *copy.uri_mut() = req.uri().clone();
    *copy.headers_mut() = req.headers().clone();
    copy
}
