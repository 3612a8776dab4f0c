use async_trait::async_trait;
use std::sync::Mutex;

use crate::error::{Result, SearchAppError};
use crate::search::raw::{RawDocument, RawSearchResponse};
use crate::search::{ListOptions, SearchClient, SearchOptions};

/// In-memory [`SearchClient`] returning canned data and recording calls.
#[derive(Default)]
pub struct FakeSearchClient {
    pub response: RawSearchResponse,
    pub documents: Vec<RawDocument>,
    /// When set, every call fails with a service error of this status.
    pub fail_status: Option<u16>,
    pub queries: Mutex<Vec<(String, SearchOptions)>>,
    pub list_calls: Mutex<usize>,
}

impl FakeSearchClient {
    pub fn with_response(value: serde_json::Value) -> Self {
        Self {
            response: serde_json::from_value(value).expect("valid search response"),
            ..Default::default()
        }
    }

    pub fn with_documents(value: serde_json::Value) -> Self {
        Self {
            documents: serde_json::from_value(value).expect("valid documents"),
            ..Default::default()
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_status: Some(status),
            ..Default::default()
        }
    }

    fn check_failure(&self) -> Result<()> {
        match self.fail_status {
            Some(401) | Some(403) => Err(SearchAppError::ServiceAuth("denied".to_string())),
            Some(status) => Err(SearchAppError::Service {
                status,
                body: "fake failure".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SearchClient for FakeSearchClient {
    async fn search(&self, query: &str, options: &SearchOptions) -> Result<RawSearchResponse> {
        self.queries
            .lock()
            .unwrap()
            .push((query.to_string(), options.clone()));
        self.check_failure()?;
        Ok(self.response.clone())
    }

    async fn list_documents(&self, _options: &ListOptions) -> Result<Vec<RawDocument>> {
        *self.list_calls.lock().unwrap() += 1;
        self.check_failure()?;
        Ok(self.documents.clone())
    }
}
