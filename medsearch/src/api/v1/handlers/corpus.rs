use axum::extract::State;

use crate::api::v1::dto::CorpusEntryResponse;
use crate::api::v1::response::{ApiError, ApiResponse, ResponseMeta};
use crate::api::AppState;

/// `GET /api/v1/corpus`
///
/// Lists every document registered with the search service.
#[utoipa::path(
    get,
    path = "/api/v1/corpus",
    tag = "corpus",
    operation_id = "corpus.list",
    responses(
        (status = 200, description = "Registered documents", body = Vec<CorpusEntryResponse>),
        (status = 503, description = "Search service not configured", body = ApiError),
    )
)]
pub async fn list_corpus(State(state): State<AppState>) -> ApiResponse<Vec<CorpusEntryResponse>> {
    match state.corpus.list_corpus().await {
        Ok(entries) => {
            let total = entries.len();
            let entries = entries.into_iter().map(CorpusEntryResponse::from).collect();
            ApiResponse::success_with_meta(entries, ResponseMeta::total(total))
        }
        Err(e) => ApiResponse::from(e),
    }
}
