//! Translation from the service's nested response schema to flat UI values.
//!
//! Filtering policy: results whose document carries no derived structured
//! data are dropped without error.

use serde_json::Value;

use crate::error::{Result, SearchAppError};
use crate::models::{last_path_segment, AnswerResult, CorpusEntry, Metadata, SourceEntry};
use crate::search::raw::{RawDocument, RawSearchResponse};

/// Build the answer and its sources from one search response.
pub fn answer_from_response(response: &RawSearchResponse) -> Result<AnswerResult> {
    Ok(AnswerResult {
        answer: response.summary_text().to_string(),
        sources: sources_from_response(response)?,
    })
}

/// Flatten search results into source entries, preserving result order.
pub fn sources_from_response(response: &RawSearchResponse) -> Result<Vec<SourceEntry>> {
    let mut sources = Vec::with_capacity(response.results.len());
    for result in &response.results {
        match source_entry(&result.document)? {
            Some(entry) => sources.push(entry),
            None => tracing::debug!(id = %result.id, "Skipping result without derived data"),
        }
    }
    Ok(sources)
}

/// Convert one result document, or `None` when it has no derived data.
pub fn source_entry(document: &RawDocument) -> Result<Option<SourceEntry>> {
    let Some(derived) = document.derived() else {
        return Ok(None);
    };

    let link = derived
        .get("link")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            SearchAppError::MalformedResponse(format!(
                "result {} has derived data without a link",
                document.id
            ))
        })?;

    let snippets = derived
        .get("snippets")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.get("snippet"))
                .filter_map(snippet_text)
                .collect()
        })
        .unwrap_or_default();

    let title = match document.metadata() {
        Some(metadata) => metadata
            .get("title")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                SearchAppError::MalformedResponse(format!(
                    "result {} has structured metadata without a title",
                    document.id
                ))
            })?
            .to_string(),
        None => last_path_segment(link).to_string(),
    };

    Ok(Some(SourceEntry {
        title,
        location: link.to_string(),
        snippets,
    }))
}

/// Snippet value as display text. Only absent or null snippets are skipped;
/// non-string values are kept in their JSON form.
fn snippet_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Convert a listed document into a corpus entry.
pub fn corpus_entry(document: &RawDocument) -> Result<CorpusEntry> {
    let uri = document.content_uri();

    let Some(payload) = document.json_payload() else {
        return Ok(CorpusEntry::from_uri(uri));
    };

    tracing::debug!(id = %document.id, "Deserializing document metadata");
    let metadata: Metadata = serde_json::from_str(payload).map_err(|e| {
        SearchAppError::Metadata(format!("document {}: {e}", document.id))
    })?;

    Ok(CorpusEntry::from_metadata(metadata, uri))
}

/// Convert a document listing, preserving service order.
pub fn corpus_from_documents(documents: &[RawDocument]) -> Result<Vec<CorpusEntry>> {
    documents.iter().map(corpus_entry).collect()
}
