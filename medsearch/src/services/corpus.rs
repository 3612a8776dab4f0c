use std::sync::Arc;

use crate::error::Result;
use crate::models::CorpusEntry;
use crate::search::{normalize, EngineTarget, ListOptions, SearchClient};

use super::answer::ensure_configured;

/// Lists the documents registered with the search service.
#[derive(Clone)]
pub struct CorpusService {
    client: Arc<dyn SearchClient>,
    target: EngineTarget,
}

impl CorpusService {
    pub fn new(client: Arc<dyn SearchClient>, target: EngineTarget) -> Self {
        Self { client, target }
    }

    pub async fn list_corpus(&self) -> Result<Vec<CorpusEntry>> {
        ensure_configured(&self.target)?;

        let documents = self
            .client
            .list_documents(&ListOptions::new(self.target.clone()))
            .await?;
        tracing::info!("List documents returned {} docs", documents.len());

        normalize::corpus_from_documents(&documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchAppError;
    use crate::search::fake::FakeSearchClient;
    use serde_json::json;

    fn target() -> EngineTarget {
        EngineTarget {
            project_id: "demo-project".to_string(),
            search_engine_id: "papers_1234".to_string(),
            location: "global".to_string(),
            serving_config_id: "default_config".to_string(),
        }
    }

    #[tokio::test]
    async fn list_corpus_normalizes_documents_in_order() {
        let fake = Arc::new(FakeSearchClient::with_documents(json!([
            {"id": "doc1", "content": {"uri": "gs://bucket/doc1.pdf"}},
            {"id": "doc2", "content": {"uri": "gs://bucket/doc2.pdf"},
             "jsonData": "{\"title\": \"Second\", \"ncbi_ref\": \"PMC2\"}"}
        ])));
        let service = CorpusService::new(fake.clone(), target());

        let corpus = service.list_corpus().await.unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus[0].title, "doc1.pdf");
        assert_eq!(corpus[0].gcs_uri, "gs://bucket/doc1.pdf");
        assert_eq!(corpus[1].title, "Second");
        assert_eq!(corpus[1].extra.get("ncbi_ref"), Some(&json!("PMC2")));
        assert_eq!(*fake.list_calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn malformed_metadata_fails_the_listing() {
        let service = CorpusService::new(
            Arc::new(FakeSearchClient::with_documents(json!([
                {"id": "doc1", "content": {"uri": "gs://bucket/doc1.pdf"}, "jsonData": "{"}
            ]))),
            target(),
        );

        let err = service.list_corpus().await.unwrap_err();
        assert!(matches!(err, SearchAppError::Metadata(_)));
    }

    #[tokio::test]
    async fn service_failure_propagates() {
        let service = CorpusService::new(Arc::new(FakeSearchClient::failing(403)), target());

        let err = service.list_corpus().await.unwrap_err();
        assert!(matches!(err, SearchAppError::ServiceAuth(_)));
    }
}
