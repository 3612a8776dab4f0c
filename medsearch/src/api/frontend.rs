use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use rust_embed::RustEmbed;

use super::v1::response::{ApiResponse, ErrorCode};

#[derive(RustEmbed)]
#[folder = "frontend"]
struct FrontendAssets;

pub async fn serve_root() -> Response {
    serve_asset_path("")
}

/// Serves embedded assets for any path the API router did not claim.
pub async fn serve_fallback(uri: Uri) -> Response {
    let path = uri.path();
    if path.starts_with("/api/") {
        return ApiResponse::<()>::error(ErrorCode::NotFound, format!("No route for {path}"))
            .into_response();
    }
    serve_asset_path(path)
}

fn serve_asset_path(path: &str) -> Response {
    let requested = path.trim_start_matches('/');
    let target = if requested.is_empty() {
        "index.html"
    } else {
        requested
    };

    if target.contains("..") {
        return StatusCode::BAD_REQUEST.into_response();
    }

    if let Some(response) = response_for_file(target) {
        return response;
    }

    // Page routes ("/corpus") render the single-page shell.
    if !target.contains('.') {
        if let Some(response) = response_for_file("index.html") {
            return response;
        }
    }

    StatusCode::NOT_FOUND.into_response()
}

fn response_for_file(path: &str) -> Option<Response> {
    let file = FrontendAssets::get(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    let mut response = Response::new(Body::from(file.data.into_owned()));
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(mime.as_ref()).ok()?,
    );
    Some(response)
}
