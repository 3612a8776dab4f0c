//! Corpus and catalog DTOs for the v1 API.

use serde::Serialize;

use crate::models::{Article, CorpusEntry, Metadata};
use crate::viewer::viewer_url;

/// A document registered with the search service.
///
/// Wire form of [`CorpusEntry`]: camelCase keys, and the entry's extra fields
/// nested under `metadata` instead of flattened.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CorpusEntryResponse {
    pub title: String,
    pub gcs_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_url: Option<String>,
    /// Any other metadata attached to the document, unmodified.
    #[schema(value_type = Object)]
    pub metadata: Metadata,
}

impl From<CorpusEntry> for CorpusEntryResponse {
    fn from(entry: CorpusEntry) -> Self {
        Self {
            view_url: viewer_url(&entry.gcs_uri),
            title: entry.title,
            gcs_uri: entry.gcs_uri,
            metadata: entry.extra,
        }
    }
}

/// A paper from the static catalog.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ncbi_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_url: Option<String>,
    #[schema(value_type = Object)]
    pub metadata: Metadata,
}

impl From<&Article> for ArticleResponse {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            ncbi_ref: article.ncbi_ref.clone(),
            download: article.download.clone(),
            view_url: article.download.as_deref().and_then(viewer_url),
            metadata: article.extra.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn corpus_entry_response_nests_extra_metadata() {
        let entry = CorpusEntry::from_metadata(
            json!({"title": "Doc One", "year": 2020}).as_object().cloned().unwrap(),
            "gs://bucket/doc1.pdf",
        );

        let json = serde_json::to_value(CorpusEntryResponse::from(entry)).expect("serialize");
        assert_eq!(json["title"], "Doc One");
        assert_eq!(json["gcsUri"], "gs://bucket/doc1.pdf");
        assert_eq!(json["metadata"], json!({"year": 2020}));
        assert!(json["viewUrl"].is_string());
    }

    #[test]
    fn article_response_uses_download_for_view_url() {
        let article: Article = serde_json::from_value(json!({
            "title": "Paper A",
            "ncbi_ref": "PMC1",
            "download": "https://example.org/a.pdf"
        }))
        .unwrap();

        let json = serde_json::to_value(ArticleResponse::from(&article)).expect("serialize");
        assert_eq!(json["ncbiRef"], "PMC1");
        assert_eq!(json["viewUrl"], "https://example.org/a.pdf");
        assert_eq!(json["metadata"], json!({}));
    }
}
