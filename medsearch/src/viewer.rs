use url::Url;

const GCS_BROWSER_HOST: &str = "https://storage.cloud.google.com";

/// Browser-viewable URL for a document storage location.
///
/// `gs://bucket/object` maps to the authenticated Cloud Storage browser URL,
/// `http(s)` URLs pass through, anything else has no viewer.
pub fn viewer_url(location: &str) -> Option<String> {
    if let Some(rest) = location.strip_prefix("gs://") {
        let (bucket, object) = rest.split_once('/')?;
        if bucket.is_empty() || object.is_empty() {
            return None;
        }
        let mut url = Url::parse(GCS_BROWSER_HOST).ok()?;
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .push(bucket)
            .extend(object.split('/'));
        return Some(url.to_string());
    }

    let url = Url::parse(location).ok()?;
    matches!(url.scheme(), "http" | "https").then(|| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcs_uri_maps_to_storage_browser() {
        assert_eq!(
            viewer_url("gs://bucket/papers/paper42.pdf").as_deref(),
            Some("https://storage.cloud.google.com/bucket/papers/paper42.pdf")
        );
    }

    #[test]
    fn gcs_object_names_are_percent_encoded() {
        assert_eq!(
            viewer_url("gs://bucket/my paper.pdf").as_deref(),
            Some("https://storage.cloud.google.com/bucket/my%20paper.pdf")
        );
    }

    #[test]
    fn gcs_uri_without_object_has_no_viewer() {
        assert_eq!(viewer_url("gs://bucket"), None);
        assert_eq!(viewer_url("gs://bucket/"), None);
        assert_eq!(viewer_url("gs:///object.pdf"), None);
    }

    #[test]
    fn http_urls_pass_through() {
        assert_eq!(
            viewer_url("https://www.ncbi.nlm.nih.gov/pmc/articles/PMC1/pdf/").as_deref(),
            Some("https://www.ncbi.nlm.nih.gov/pmc/articles/PMC1/pdf/")
        );
    }

    #[test]
    fn other_locations_have_no_viewer() {
        assert_eq!(viewer_url("file:///tmp/a.pdf"), None);
        assert_eq!(viewer_url("paper42.pdf"), None);
        assert_eq!(viewer_url(""), None);
    }
}
