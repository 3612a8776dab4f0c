use serde::{Deserialize, Serialize};

/// One source document backing an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    pub title: String,
    /// Opaque storage locator of the document, usually a `gs://` URI.
    #[serde(rename = "gcs_uri")]
    pub location: String,
    /// Highlighted snippets in the order the service returned them.
    pub snippets: Vec<String>,
}

/// Answer text plus the sources it was drawn from.
///
/// An empty `sources` list is a valid result ("no sources"), not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub answer: String,
    pub sources: Vec<SourceEntry>,
}
