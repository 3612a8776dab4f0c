use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::frontend;
use super::v1;
use super::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/v1", v1::router::v1_router())
        .route("/", get(frontend::serve_root))
        .fallback(frontend::serve_fallback)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
