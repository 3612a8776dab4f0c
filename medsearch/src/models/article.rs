use serde::{Deserialize, Serialize};

use super::Metadata;

/// One paper from the static local catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ncbi_ref: Option<String>,
    /// Where the paper's PDF can be fetched from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download: Option<String>,
    #[serde(flatten)]
    pub extra: Metadata,
}
