// Common test utilities for integration tests
use std::io::Write;
use std::sync::{Arc, Once};

use medsearch::api::AppState;
use medsearch::catalog::Catalog;
use medsearch::config::{CatalogConfig, Config, SearchConfig, ServerConfig, DEFAULT_QUESTIONS};
use medsearch::search::{DiscoveryEngineClient, SearchClient};

static INIT: Once = Once::new();

/// Initialize tracing subscriber once for tests
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

pub fn search_config(endpoint: &str) -> SearchConfig {
    SearchConfig {
        project_id: "demo-project".to_string(),
        search_engine_id: "papers_1234".to_string(),
        location: "global".to_string(),
        serving_config_id: "default_config".to_string(),
        endpoint: endpoint.to_string(),
        access_token: Some("ya29.integration".to_string()),
        timeout_secs: 5,
    }
}

/// Write a catalog file that lives as long as the returned handle.
pub fn catalog_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create catalog file");
    file.write_all(contents.as_bytes())
        .expect("write catalog file");
    file
}

/// Application state talking to the search service at `endpoint`.
pub fn app_state(search: SearchConfig, catalog: &tempfile::NamedTempFile) -> AppState {
    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        search: search.clone(),
        catalog: CatalogConfig {
            path: catalog.path().display().to_string(),
        },
        questions: DEFAULT_QUESTIONS.iter().map(|q| q.to_string()).collect(),
    };
    let client: Arc<dyn SearchClient> =
        Arc::new(DiscoveryEngineClient::new(&search).expect("valid endpoint"));
    let catalog = Catalog::load(catalog.path()).expect("valid catalog");

    AppState::new(config, client, catalog)
}

// Re-export commonly used crates for convenience
pub use serial_test::serial;
pub use tempfile;
pub use wiremock;
