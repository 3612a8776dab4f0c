use std::sync::Arc;

use crate::error::{Result, SearchAppError};
use crate::models::AnswerResult;
use crate::search::{normalize, EngineTarget, SearchClient, SearchOptions};

/// Dispatches a question to the search service and normalizes the reply.
#[derive(Clone)]
pub struct AnswerService {
    client: Arc<dyn SearchClient>,
    target: EngineTarget,
}

impl AnswerService {
    pub fn new(client: Arc<dyn SearchClient>, target: EngineTarget) -> Self {
        Self { client, target }
    }

    pub fn target(&self) -> &EngineTarget {
        &self.target
    }

    pub async fn generate_answer(&self, query: &str) -> Result<AnswerResult> {
        if query.trim().is_empty() {
            return Err(SearchAppError::Validation(
                "Question cannot be empty".to_string(),
            ));
        }
        ensure_configured(&self.target)?;

        let options = SearchOptions::new(self.target.clone());
        let response = self.client.search(query, &options).await?;
        let result = normalize::answer_from_response(&response)?;

        tracing::info!(
            results = response.results.len(),
            sources = result.sources.len(),
            "Answer generated"
        );
        Ok(result)
    }
}

pub(crate) fn ensure_configured(target: &EngineTarget) -> Result<()> {
    if target.project_id.is_empty() || target.search_engine_id.is_empty() {
        return Err(SearchAppError::Config(
            "PROJECT_ID and SEARCH_ENGINE_ID must be set".to_string(),
        ));
    }
    Ok(())
}
