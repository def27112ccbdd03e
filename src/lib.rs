//! ddg-scout: DuckDuckGo search and page-fetch tools for LLM agents
//!
//! This crate implements the scrape-and-normalize pipeline behind two
//! agent-facing operations: keyword search against DuckDuckGo's HTML
//! endpoint, and fetching an arbitrary web page as cleaned text. Outbound
//! requests are rate limited, and every failure mode degrades to a
//! caller-safe result instead of a fault.

pub mod config;
pub mod events;
pub mod fetch;
pub mod limiter;
pub mod search;
pub mod server;

use thiserror::Error;

/// Main error type for ddg-scout operations
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl ScoutError {
    /// Classifies a reqwest failure against the URL it targeted
    pub(crate) fn from_reqwest(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            ScoutError::Timeout {
                url: url.to_string(),
            }
        } else {
            ScoutError::Http {
                url: url.to_string(),
                source,
            }
        }
    }
}

/// Result type alias for ddg-scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, FetchConfig, SearchConfig};
pub use events::{EventSink, TracingSink};
pub use fetch::WebContentFetcher;
pub use limiter::RateLimiter;
pub use search::{DuckDuckGoSearcher, SafeSearchMode, SearchResult};
pub use server::ToolServer;
