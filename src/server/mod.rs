//! Inbound tool surface
//!
//! `ToolServer` owns the two pipelines and exposes the text-returning
//! operations a transport layer mounts as agent tools. Both operations are
//! total: whatever happens underneath, the caller receives a string.

use crate::config::Config;
use crate::events::EventSink;
use crate::fetch::WebContentFetcher;
use crate::search::{format_results_for_llm, DuckDuckGoSearcher};
use crate::Result;
use std::sync::Arc;

/// The two agent-facing operations behind one configuration
pub struct ToolServer {
    searcher: DuckDuckGoSearcher,
    fetcher: WebContentFetcher,
}

impl ToolServer {
    /// Builds both pipelines and announces the effective settings
    ///
    /// The startup event reports the resolved SafeSearch mode, so a
    /// misconfigured name is visible as the MODERATE fallback it became.
    pub fn new(config: &Config, sink: Arc<dyn EventSink>) -> Result<Self> {
        let searcher = DuckDuckGoSearcher::new(&config.search, Arc::clone(&sink))?;
        let fetcher = WebContentFetcher::new(&config.fetch, Arc::clone(&sink))?;

        let mode = searcher.safe_search();
        sink.info(&format!(
            "ddg-scout initialized: SafeSearch: {} (kp={}), Region: {}",
            mode,
            mode.wire_code(),
            if config.search.region.is_empty() {
                "none"
            } else {
                &config.search.region
            },
        ));

        Ok(Self { searcher, fetcher })
    }

    /// Points the search pipeline at a different endpoint, e.g. a local
    /// test server
    pub fn with_search_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.searcher = self.searcher.with_base_url(base_url);
        self
    }

    /// Searches DuckDuckGo and renders the results for an LLM caller
    ///
    /// `max_results` is clamped to the configured cap; `region` overrides
    /// the configured default when non-empty.
    pub async fn search(&self, query: &str, max_results: usize, region: &str) -> String {
        let results = self.searcher.search(query, max_results, region).await;
        format_results_for_llm(&results)
    }

    /// Fetches a page and returns its cleaned text, or an error description
    pub async fn fetch_content(&self, url: &str) -> String {
        self.fetcher.fetch_and_parse(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::TracingSink;

    #[test]
    fn test_build_server() {
        let config = Config::default();
        let server = ToolServer::new(&config, Arc::new(TracingSink));
        assert!(server.is_ok());
    }
}
