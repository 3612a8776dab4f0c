use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Medsearch API",
        version = "1.0.0",
        description = "Question answering over a PDF corpus, backed by a managed enterprise search service.",
    ),
    paths(
        handlers::health::health_check,
        handlers::questions::list_questions,
        handlers::answers::create_answer,
        handlers::corpus::list_corpus,
        handlers::catalog::list_catalog,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        response::ResponseMeta,
        // Answers
        dto::answers::AnswerRequest,
        dto::answers::AnswerResponse,
        dto::answers::SourceResponse,
        dto::answers::QuestionsResponse,
        // Corpus
        dto::corpus::CorpusEntryResponse,
        dto::corpus::ArticleResponse,
        // Health (handler-local types)
        handlers::health::HealthData,
        handlers::health::SearchStatus,
        handlers::health::CatalogStatus,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "answers", description = "Question answering with cited sources"),
        (name = "corpus", description = "Documents known to the search service and the static catalog"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
