use serde_json::{Map, Value};

/// Free-form metadata carried through from the search service or catalog.
pub type Metadata = Map<String, Value>;

/// Final `/`-delimited segment of a resource locator.
///
/// Used as the display title when a document has no structured metadata.
/// A locator ending in `/` yields the empty string.
pub fn last_path_segment(location: &str) -> &str {
    location.rsplit('/').next().unwrap_or(location)
}
