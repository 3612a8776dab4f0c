//! v1 Answer handler.
//!
//! Implements `POST /api/v1/answers`: one search round trip per question.

use axum::extract::State;

use crate::api::extractors::AppJson;
use crate::api::v1::dto::{AnswerRequest, AnswerResponse};
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::AppState;

/// `POST /api/v1/answers`
///
/// Sends the question to the search service and returns the summarized
/// answer with its source documents. Zero sources is a successful response.
#[utoipa::path(
    post,
    path = "/api/v1/answers",
    tag = "answers",
    operation_id = "answers.create",
    request_body = AnswerRequest,
    responses(
        (status = 200, description = "Answer with sources", body = AnswerResponse),
        (status = 400, description = "Empty question or malformed body", body = ApiError),
        (status = 503, description = "Search service not configured", body = ApiError),
    )
)]
pub async fn create_answer(
    State(state): State<AppState>,
    AppJson(req): AppJson<AnswerRequest>,
) -> ApiResponse<AnswerResponse> {
    match state.answers.generate_answer(&req.question).await {
        Ok(result) => ApiResponse::success(AnswerResponse::from(result)),
        Err(e) => ApiResponse::from(e),
    }
}
