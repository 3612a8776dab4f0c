use async_trait::async_trait;

use crate::error::Result;
use crate::search::raw::{RawDocument, RawSearchResponse};

/// Number of results requested per search.
pub const PAGE_SIZE: u32 = 3;
/// Number of top results the service summarizes into the answer.
pub const SUMMARY_RESULT_COUNT: u32 = 3;
/// Maximum snippets returned per result document.
pub const MAX_SNIPPET_COUNT: u32 = 3;

const DEFAULT_COLLECTION: &str = "default_collection";
const DEFAULT_BRANCH: &str = "default_branch";

/// Identifies one search engine (data store) of the managed service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineTarget {
    pub project_id: String,
    pub search_engine_id: String,
    pub location: String,
    pub serving_config_id: String,
}

impl EngineTarget {
    /// Resource name of the serving config used for search requests.
    pub fn serving_config_path(&self) -> String {
        format!(
            "projects/{}/locations/{}/dataStores/{}/servingConfigs/{}",
            self.project_id, self.location, self.search_engine_id, self.serving_config_id
        )
    }

    /// Resource name of the branch that holds the engine's documents.
    pub fn branch_path(&self) -> String {
        format!(
            "projects/{}/locations/{}/collections/{}/dataStores/{}/branches/{}",
            self.project_id, self.location, DEFAULT_COLLECTION, self.search_engine_id, DEFAULT_BRANCH
        )
    }
}

#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub target: EngineTarget,
    pub page_size: u32,
    pub summary_result_count: u32,
    pub max_snippet_count: u32,
}

impl SearchOptions {
    pub fn new(target: EngineTarget) -> Self {
        Self {
            target,
            page_size: PAGE_SIZE,
            summary_result_count: SUMMARY_RESULT_COUNT,
            max_snippet_count: MAX_SNIPPET_COUNT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListOptions {
    pub target: EngineTarget,
}

impl ListOptions {
    pub fn new(target: EngineTarget) -> Self {
        Self { target }
    }
}

/// The two operations the application needs from the managed search service.
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Run a summarized search and return the raw response page.
    async fn search(&self, query: &str, options: &SearchOptions) -> Result<RawSearchResponse>;

    /// List the documents registered with the engine, in service order.
    async fn list_documents(&self, options: &ListOptions) -> Result<Vec<RawDocument>>;
}
