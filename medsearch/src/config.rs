use serde::Deserialize;
use std::env;

use crate::search::EngineTarget;

pub const DEFAULT_ENDPOINT: &str = "https://discoveryengine.googleapis.com/v1beta";
pub const DEFAULT_LOCATION: &str = "global";
pub const DEFAULT_SERVING_CONFIG: &str = "default_config";

/// Sample questions offered by the demo page.
pub const DEFAULT_QUESTIONS: &[&str] = &[
    "What is the main function of the Frontal Cortex?",
    "What is hierarchical reinforcement learning?",
];

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

/// Parse `DEMO_QUESTIONS`: `|`-separated questions, blanks skipped.
fn parse_questions() -> Vec<String> {
    let parsed: Vec<String> = env::var("DEMO_QUESTIONS")
        .unwrap_or_default()
        .split('|')
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_string)
        .collect();

    if parsed.is_empty() {
        DEFAULT_QUESTIONS.iter().map(|q| q.to_string()).collect()
    } else {
        parsed
    }
}

/// Read a string variable, treating empty values as unset.
fn env_non_empty(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub search: SearchConfig,
    pub catalog: CatalogConfig,
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Connection settings for the managed search service.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    pub project_id: String,
    pub search_engine_id: String,
    pub location: String,
    pub serving_config_id: String,
    /// REST base URL, without a trailing slash.
    pub endpoint: String,
    /// OAuth bearer token sent with every request. Unset means anonymous,
    /// which only works against emulators and test servers.
    pub access_token: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub path: String,
}

impl SearchConfig {
    pub fn target(&self) -> EngineTarget {
        EngineTarget {
            project_id: self.project_id.clone(),
            search_engine_id: self.search_engine_id.clone(),
            location: self.location.clone(),
            serving_config_id: self.serving_config_id.clone(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.project_id.is_empty() && !self.search_engine_id.is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("MEDSEARCH_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("MEDSEARCH_PORT", 3000),
            },
            search: SearchConfig {
                project_id: env_non_empty("PROJECT_ID").unwrap_or_default(),
                search_engine_id: env_non_empty("SEARCH_ENGINE_ID").unwrap_or_default(),
                location: env_non_empty("SEARCH_LOCATION")
                    .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
                serving_config_id: env_non_empty("SERVING_CONFIG_ID")
                    .unwrap_or_else(|| DEFAULT_SERVING_CONFIG.to_string()),
                endpoint: env_non_empty("DISCOVERY_ENGINE_ENDPOINT")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
                access_token: env_non_empty("GOOGLE_ACCESS_TOKEN"),
                timeout_secs: parse_env_or("SEARCH_TIMEOUT", 30),
            },
            catalog: CatalogConfig {
                path: env::var("CATALOG_PATH").unwrap_or_else(|_| "data/articles.json".to_string()),
            },
            questions: parse_questions(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
