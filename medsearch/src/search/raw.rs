//! Wire types for the managed search service's REST responses.
//!
//! Only the fields the application reads are modelled. `structData` and
//! `derivedStructData` are protobuf `Struct`s and arrive as free-form JSON
//! objects, so they stay as [`serde_json::Map`].

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSearchResponse {
    #[serde(default)]
    pub results: Vec<RawSearchResult>,
    pub summary: Option<RawSummary>,
    pub total_size: Option<i64>,
    pub next_page_token: Option<String>,
}

impl RawSearchResponse {
    /// Summary text, or the empty string when the service produced none.
    pub fn summary_text(&self) -> &str {
        self.summary
            .as_ref()
            .map(|s| s.summary_text.as_str())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSearchResult {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub document: RawDocument,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSummary {
    #[serde(default)]
    pub summary_text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: String,
    /// User-supplied metadata attached at ingestion.
    pub struct_data: Option<Map<String, Value>>,
    /// Service-computed data: canonical `link`, extracted `snippets`, ...
    pub derived_struct_data: Option<Map<String, Value>>,
    /// User-supplied metadata as a serialized JSON string.
    pub json_data: Option<String>,
    pub content: Option<RawContent>,
}

impl RawDocument {
    /// Derived structured data, treating an empty object as absent.
    pub fn derived(&self) -> Option<&Map<String, Value>> {
        self.derived_struct_data.as_ref().filter(|m| !m.is_empty())
    }

    /// Structured metadata, treating an empty object as absent.
    pub fn metadata(&self) -> Option<&Map<String, Value>> {
        self.struct_data.as_ref().filter(|m| !m.is_empty())
    }

    /// JSON metadata payload, treating an empty string as absent.
    pub fn json_payload(&self) -> Option<&str> {
        self.json_data.as_deref().filter(|s| !s.is_empty())
    }

    /// Storage location of the document's content, empty when unknown.
    pub fn content_uri(&self) -> &str {
        self.content
            .as_ref()
            .map(|c| c.uri.as_str())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContent {
    #[serde(default)]
    pub uri: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<RawDocument>,
    pub next_page_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_response_parses_service_shape() {
        let response: RawSearchResponse = serde_json::from_value(json!({
            "results": [{
                "id": "doc-1",
                "document": {
                    "name": "projects/p/locations/global/dataStores/ds/branches/0/documents/doc-1",
                    "id": "doc-1",
                    "derivedStructData": {
                        "link": "gs://bucket/paper42.pdf",
                        "snippets": [{"snippet": "intro text", "snippet_status": "SUCCESS"}]
                    }
                }
            }],
            "totalSize": 1,
            "summary": {"summaryText": "An answer."}
        }))
        .unwrap();

        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].document.id, "doc-1");
        assert!(response.results[0].document.derived().is_some());
        assert!(response.results[0].document.metadata().is_none());
        assert_eq!(response.total_size, Some(1));
        assert_eq!(response.summary_text(), "An answer.");
    }

    #[test]
    fn empty_response_has_no_results_and_no_summary() {
        let response: RawSearchResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.results.is_empty());
        assert_eq!(response.summary_text(), "");
    }

    #[test]
    fn empty_objects_and_strings_count_as_absent() {
        let doc: RawDocument = serde_json::from_value(json!({
            "structData": {},
            "derivedStructData": {},
            "jsonData": ""
        }))
        .unwrap();

        assert!(doc.metadata().is_none());
        assert!(doc.derived().is_none());
        assert!(doc.json_payload().is_none());
        assert_eq!(doc.content_uri(), "");
    }

    #[test]
    fn list_response_parses_documents() {
        let response: RawListDocumentsResponse = serde_json::from_value(json!({
            "documents": [{
                "id": "doc1",
                "content": {"uri": "gs://bucket/doc1.pdf", "mimeType": "application/pdf"},
                "jsonData": "{\"title\": \"Doc One\"}"
            }],
            "nextPageToken": "abc"
        }))
        .unwrap();

        assert_eq!(response.documents.len(), 1);
        let doc = &response.documents[0];
        assert_eq!(doc.content_uri(), "gs://bucket/doc1.pdf");
        assert_eq!(doc.json_payload(), Some("{\"title\": \"Doc One\"}"));
        assert_eq!(response.next_page_token.as_deref(), Some("abc"));
    }
}
