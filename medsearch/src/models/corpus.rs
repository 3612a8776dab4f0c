use serde::{Deserialize, Serialize};

use super::{last_path_segment, Metadata};

/// A document registered with the search service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusEntry {
    pub title: String,
    pub gcs_uri: String,
    /// Remaining metadata fields, unmodified.
    #[serde(flatten)]
    pub extra: Metadata,
}

impl CorpusEntry {
    /// Entry for a document that carries no metadata payload.
    pub fn from_uri(gcs_uri: &str) -> Self {
        Self {
            title: last_path_segment(gcs_uri).to_string(),
            gcs_uri: gcs_uri.to_string(),
            extra: Metadata::new(),
        }
    }

    /// Entry built from a parsed metadata record.
    ///
    /// A string `title` is lifted out of the record; otherwise the title falls
    /// back to the URI's last path segment. Any `gcs_uri` in the record is
    /// replaced by the document's storage location.
    pub fn from_metadata(mut metadata: Metadata, gcs_uri: &str) -> Self {
        metadata.remove("gcs_uri");
        let title = match metadata.remove("title") {
            Some(serde_json::Value::String(title)) => title,
            Some(other) => {
                metadata.insert("title".to_string(), other);
                last_path_segment(gcs_uri).to_string()
            }
            None => last_path_segment(gcs_uri).to_string(),
        };

        Self {
            title,
            gcs_uri: gcs_uri.to_string(),
            extra: metadata,
        }
    }
}
