//! Answer request/response DTOs for the v1 API.

use serde::{Deserialize, Serialize};

use crate::models::{AnswerResult, SourceEntry};
use crate::viewer::viewer_url;

/// Request body for `POST /v1/answers`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    /// Free-text question sent to the search service.
    pub question: String,
}

/// Response for `POST /v1/answers`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResponse {
    /// Summary text produced by the search service. May be empty.
    pub answer: String,
    /// Source documents in service ranking order. Empty means "no sources".
    pub sources: Vec<SourceResponse>,
}

/// One source document of an answer.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceResponse {
    pub title: String,
    /// Storage location as reported by the search service.
    pub gcs_uri: String,
    /// Browser URL for viewing the document, when one can be derived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_url: Option<String>,
    /// Highlighted snippets. May contain inline HTML emphasis.
    pub snippets: Vec<String>,
}

impl From<SourceEntry> for SourceResponse {
    fn from(entry: SourceEntry) -> Self {
        Self {
            view_url: viewer_url(&entry.location),
            title: entry.title,
            gcs_uri: entry.location,
            snippets: entry.snippets,
        }
    }
}

impl From<AnswerResult> for AnswerResponse {
    fn from(result: AnswerResult) -> Self {
        Self {
            answer: result.answer,
            sources: result.sources.into_iter().map(SourceResponse::from).collect(),
        }
    }
}

/// Response for `GET /v1/questions`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsResponse {
    pub questions: Vec<String>,
}
