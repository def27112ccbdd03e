//! DuckDuckGo search pipeline
//!
//! One call performs one rate-limited, form-encoded POST against the HTML
//! search endpoint and parses the response into typed results. SafeSearch
//! mode and the default region are fixed at construction; the region may be
//! overridden per call. Failures never propagate: the caller always gets a
//! (possibly empty) result sequence.

mod parser;
mod types;

pub use parser::{format_results_for_llm, parse_results};
pub use types::{SafeSearchMode, SearchResult};

use crate::config::SearchConfig;
use crate::events::EventSink;
use crate::limiter::RateLimiter;
use crate::{Result, ScoutError};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// DuckDuckGo HTML search endpoint
const SEARCH_URL: &str = "https://html.duckduckgo.com/html";

/// Desktop browser user-agent sent with search requests
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
(KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Search pipeline bound to one endpoint, SafeSearch mode, and rate budget
pub struct DuckDuckGoSearcher {
    client: Client,
    limiter: RateLimiter,
    base_url: String,
    safe_search: SafeSearchMode,
    default_region: String,
    max_results_cap: usize,
    sink: Arc<dyn EventSink>,
}

impl DuckDuckGoSearcher {
    /// Builds the search pipeline from its configuration section
    pub fn new(config: &SearchConfig, sink: Arc<dyn EventSink>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            limiter: RateLimiter::new(config.requests_per_minute),
            base_url: SEARCH_URL.to_string(),
            safe_search: config.safe_search_mode(),
            default_region: config.region.clone(),
            max_results_cap: config.max_results,
            sink,
        })
    }

    /// Points the searcher at a different endpoint, e.g. a local test server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The SafeSearch mode this searcher was constructed with
    pub fn safe_search(&self) -> SafeSearchMode {
        self.safe_search
    }

    /// Searches DuckDuckGo and returns up to `max_results` results
    ///
    /// `region` overrides the configured default when non-empty. An empty
    /// return is a valid outcome; timeouts, transport errors, and parse
    /// anomalies also degrade to an empty sequence after being reported
    /// through the event sink.
    pub async fn search(
        &self,
        query: &str,
        max_results: usize,
        region: &str,
    ) -> Vec<SearchResult> {
        match self.try_search(query, max_results, region).await {
            Ok(results) => results,
            Err(ScoutError::Timeout { .. }) => {
                self.sink.error("Search request timed out");
                Vec::new()
            }
            Err(ScoutError::Http { source, .. }) => {
                self.sink
                    .error(&format!("HTTP error occurred: {source}"));
                Vec::new()
            }
            Err(e) => {
                self.sink
                    .error(&format!("Unexpected error during search: {e}"));
                Vec::new()
            }
        }
    }

    async fn try_search(
        &self,
        query: &str,
        max_results: usize,
        region: &str,
    ) -> Result<Vec<SearchResult>> {
        self.limiter.acquire().await;

        let effective_region = if region.is_empty() {
            self.default_region.as_str()
        } else {
            region
        };
        let max_results = max_results.clamp(1, self.max_results_cap);

        self.sink.info(&format!(
            "Searching DuckDuckGo for: {} (SafeSearch: {}, Region: {})",
            query,
            self.safe_search,
            if effective_region.is_empty() {
                "default"
            } else {
                effective_region
            },
        ));

        let form = [
            ("q", query),
            ("b", ""),
            ("kl", effective_region),
            ("kp", self.safe_search.wire_code()),
        ];

        let response = self
            .client
            .post(&self.base_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| ScoutError::from_reqwest(&self.base_url, e))?
            .error_for_status()
            .map_err(|e| ScoutError::from_reqwest(&self.base_url, e))?;

        let body = response
            .text()
            .await
            .map_err(|e| ScoutError::from_reqwest(&self.base_url, e))?;

        let results = parser::parse_results(&body, max_results);
        self.sink
            .info(&format!("Successfully found {} results", results.len()));

        Ok(results)
    }
}
