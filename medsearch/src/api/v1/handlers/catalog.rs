use axum::extract::State;

use crate::api::v1::dto::ArticleResponse;
use crate::api::v1::response::{ApiResponse, ResponseMeta};
use crate::api::AppState;

/// `GET /api/v1/catalog`
///
/// The static paper catalog loaded at startup.
#[utoipa::path(
    get,
    path = "/api/v1/catalog",
    tag = "corpus",
    operation_id = "catalog.list",
    responses(
        (status = 200, description = "Catalog articles", body = Vec<ArticleResponse>),
    )
)]
pub async fn list_catalog(State(state): State<AppState>) -> ApiResponse<Vec<ArticleResponse>> {
    let articles: Vec<ArticleResponse> = state
        .catalog
        .articles()
        .iter()
        .map(ArticleResponse::from)
        .collect();
    let total = articles.len();
    ApiResponse::success_with_meta(articles, ResponseMeta::total(total))
}
