use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchAppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Search service error {status}: {body}")]
    Service { status: u16, body: String },

    #[error("Search service rate limit exceeded, retry after {retry_after:?} seconds")]
    ServiceRateLimit { retry_after: Option<u64> },

    #[error("Search service authentication error: {0}")]
    ServiceAuth(String),

    #[error("Malformed search response: {0}")]
    MalformedResponse(String),

    #[error("Invalid document metadata: {0}")]
    Metadata(String),

    #[error("Catalog error: {0}")]
    Catalog(String),
}

pub type Result<T> = std::result::Result<T, SearchAppError>;
