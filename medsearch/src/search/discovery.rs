use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, RequestBuilder,
};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use url::Url;

use crate::config::SearchConfig;
use crate::error::{Result, SearchAppError};
use crate::search::client::{ListOptions, SearchClient, SearchOptions};
use crate::search::raw::{RawDocument, RawListDocumentsResponse, RawSearchResponse};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest<'a> {
    query: &'a str,
    page_size: u32,
    content_search_spec: ContentSearchSpec,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContentSearchSpec {
    summary_spec: SummarySpec,
    snippet_spec: SnippetSpec,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SummarySpec {
    summary_result_count: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SnippetSpec {
    max_snippet_count: u32,
}

impl<'a> SearchRequest<'a> {
    fn new(query: &'a str, options: &SearchOptions) -> Self {
        Self {
            query,
            page_size: options.page_size,
            content_search_spec: ContentSearchSpec {
                summary_spec: SummarySpec {
                    summary_result_count: options.summary_result_count,
                },
                snippet_spec: SnippetSpec {
                    max_snippet_count: options.max_snippet_count,
                },
            },
        }
    }
}

/// REST client for Discovery Engine (Vertex AI Search).
///
/// Issues exactly one HTTP request per call. There is no retry loop: any
/// transport or service failure is returned to the caller as-is.
#[derive(Clone)]
pub struct DiscoveryEngineClient {
    client: Client,
    endpoint: String,
    access_token: Option<String>,
}

impl DiscoveryEngineClient {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        Url::parse(&config.endpoint)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SearchAppError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
        })
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(ref token) = self.access_token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|e| SearchAppError::Config(format!("Invalid access token header: {e}")))?,
            );
        }

        Ok(headers)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let resp = request.headers(self.headers()?).send().await?;
        let status = resp.status();

        if status.is_success() {
            return resp.json::<T>().await.map_err(|e| {
                SearchAppError::MalformedResponse(format!("Failed to parse response: {e}"))
            });
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = resp
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok());
            return Err(SearchAppError::ServiceRateLimit { retry_after });
        }

        let body = resp.text().await.unwrap_or_default();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(SearchAppError::ServiceAuth(body));
        }

        Err(SearchAppError::Service {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl SearchClient for DiscoveryEngineClient {
    async fn search(&self, query: &str, options: &SearchOptions) -> Result<RawSearchResponse> {
        let serving_config = options.target.serving_config_path();
        let url = format!("{}/{}:search", self.endpoint, serving_config);
        tracing::info!(%serving_config, "Searching engine");

        let body = SearchRequest::new(query, options);
        let response: RawSearchResponse = self.send(self.client.post(&url).json(&body)).await?;

        tracing::debug!(
            results = response.results.len(),
            total_size = response.total_size.unwrap_or_default(),
            has_summary = response.summary.is_some(),
            "Search returned"
        );
        Ok(response)
    }

    async fn list_documents(&self, options: &ListOptions) -> Result<Vec<RawDocument>> {
        let parent = options.target.branch_path();
        let url = format!("{}/{}/documents", self.endpoint, parent);
        tracing::info!(%parent, "List documents");

        let response: RawListDocumentsResponse = self.send(self.client.get(&url)).await?;
        if response.next_page_token.is_some() {
            tracing::debug!("Document listing has further pages; only the first page is used");
        }

        Ok(response.documents)
    }
}
