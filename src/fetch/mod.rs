//! Web page fetch pipeline
//!
//! One call performs one rate-limited GET (redirects followed) and extracts
//! the page's readable text. The pipeline never fails: timeouts, transport
//! errors, and anything unexpected come back as a descriptive error string
//! after being reported through the event sink.

mod extract;

pub use extract::extract_text;

use crate::config::FetchConfig;
use crate::events::EventSink;
use crate::limiter::RateLimiter;
use crate::{Result, ScoutError};
use reqwest::redirect::Policy;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Browser-like user-agent sent with page fetches
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Maximum redirect hops to follow on a fetch
const MAX_REDIRECTS: usize = 10;

/// Fetch pipeline with its own rate budget, independent of search
pub struct WebContentFetcher {
    client: Client,
    limiter: RateLimiter,
    sink: Arc<dyn EventSink>,
}

impl WebContentFetcher {
    /// Builds the fetch pipeline from its configuration section
    pub fn new(config: &FetchConfig, sink: Arc<dyn EventSink>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Self {
            client,
            limiter: RateLimiter::new(config.requests_per_minute),
            sink,
        })
    }

    /// Fetches a page and returns its cleaned, capped text
    ///
    /// Never fails; each failure mode maps to a fixed descriptive string.
    pub async fn fetch_and_parse(&self, url: &str) -> String {
        match self.try_fetch(url).await {
            Ok(text) => text,
            Err(ScoutError::Timeout { url }) => {
                self.sink
                    .error(&format!("Request timed out for URL: {url}"));
                "Error: The request timed out while trying to fetch the webpage.".to_string()
            }
            Err(ScoutError::Http { url, source }) => {
                self.sink.error(&format!(
                    "HTTP error occurred while fetching {url}: {source}"
                ));
                format!("Error: Could not access the webpage ({source})")
            }
            Err(e) => {
                self.sink
                    .error(&format!("Error fetching content from {url}: {e}"));
                format!("Error: An unexpected error occurred while fetching the webpage ({e})")
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<String> {
        self.limiter.acquire().await;

        let target = Url::parse(url).map_err(|e| ScoutError::InvalidUrl {
            url: url.to_string(),
            source: e,
        })?;

        self.sink.info(&format!("Fetching content from: {url}"));

        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(|e| ScoutError::from_reqwest(url, e))?
            .error_for_status()
            .map_err(|e| ScoutError::from_reqwest(url, e))?;

        let body = response
            .text()
            .await
            .map_err(|e| ScoutError::from_reqwest(url, e))?;

        let text = extract::extract_text(&body);
        self.sink.info(&format!(
            "Successfully fetched and parsed content ({} characters)",
            text.chars().count()
        ));

        Ok(text)
    }
}
