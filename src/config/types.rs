use serde::Deserialize;

use crate::search::SafeSearchMode;

/// Main configuration structure for ddg-scout
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub fetch: FetchConfig,
}

/// Search pipeline configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// SafeSearch filtering level: "strict", "moderate", or "off"
    #[serde(rename = "safe-search")]
    pub safe_search: String,

    /// Default region code (e.g. "us-en"); empty means no preference
    pub region: String,

    /// Outbound search request budget per trailing minute
    #[serde(rename = "requests-per-minute")]
    pub requests_per_minute: u32,

    /// Cap on results returned from a single search
    #[serde(rename = "max-results")]
    pub max_results: usize,

    /// Outbound request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            safe_search: "moderate".to_string(),
            region: String::new(),
            requests_per_minute: 30,
            max_results: 10,
            timeout_secs: 30,
        }
    }
}

impl SearchConfig {
    /// Resolves the configured SafeSearch name, case-insensitively
    ///
    /// Unrecognized or absent names fall back to Moderate.
    pub fn safe_search_mode(&self) -> SafeSearchMode {
        match SafeSearchMode::from_name(&self.safe_search) {
            Some(mode) => mode,
            None => {
                tracing::warn!(
                    "Invalid safe-search value '{}', using MODERATE",
                    self.safe_search
                );
                SafeSearchMode::Moderate
            }
        }
    }
}

/// Fetch pipeline configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Outbound fetch request budget per trailing minute
    #[serde(rename = "requests-per-minute")]
    pub requests_per_minute: u32,

    /// Outbound request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            requests_per_minute: 20,
            timeout_secs: 30,
        }
    }
}
