use axum::{
    routing::{get, post},
    Router,
};

use crate::api::state::AppState;

use super::handlers;

pub fn v1_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/questions", get(handlers::questions::list_questions))
        .route("/answers", post(handlers::answers::create_answer))
        .route("/corpus", get(handlers::corpus::list_corpus))
        .route("/catalog", get(handlers::catalog::list_catalog))
        .route("/openapi.json", get(super::openapi::openapi_json))
        .merge(super::openapi::redoc_router())
}
