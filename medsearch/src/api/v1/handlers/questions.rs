use axum::extract::State;

use crate::api::state::AppState;
use crate::api::v1::dto::QuestionsResponse;
use crate::api::v1::response::ApiResponse;

/// `GET /api/v1/questions`
///
/// The demo's sample questions, in display order.
#[utoipa::path(
    get,
    path = "/api/v1/questions",
    tag = "answers",
    operation_id = "questions.list",
    responses(
        (status = 200, description = "Sample questions", body = QuestionsResponse),
    )
)]
pub async fn list_questions(State(state): State<AppState>) -> ApiResponse<QuestionsResponse> {
    ApiResponse::success(QuestionsResponse {
        questions: state.config.questions.clone(),
    })
}
