//! Search-results parsing and rendering
//!
//! Extracts an ordered sequence of results from a DuckDuckGo HTML response:
//! - result blocks are scanned in document order
//! - ad results (href containing `y.js`) are dropped
//! - redirect-wrapper links are unwrapped to their real destination
//! - positions are 1-based over retained results only

use crate::search::types::SearchResult;
use scraper::{ElementRef, Html, Selector};

/// Prefix of DuckDuckGo redirect-wrapper links
const REDIRECT_PREFIX: &str = "//duckduckgo.com/l/?uddg=";

/// Marker token present in ad result links
const AD_MARKER: &str = "y.js";

/// Advisory returned when a search produced no results
const NO_RESULTS_ADVISORY: &str = "No results were found for your search query. \
This could be due to DuckDuckGo's bot detection or the query returned no matches. \
Please try rephrasing your search or try again in a few minutes.";

/// Parses search results out of a response document
///
/// Malformed result blocks (missing title or anchor) are skipped silently;
/// an unparsable document yields an empty sequence rather than an error.
/// Scanning stops once `max_results` results have been retained.
pub fn parse_results(html: &str, max_results: usize) -> Vec<SearchResult> {
    try_parse_results(html, max_results).unwrap_or_default()
}

fn try_parse_results(html: &str, max_results: usize) -> Option<Vec<SearchResult>> {
    let result_selector = Selector::parse(".result").ok()?;
    let title_selector = Selector::parse(".result__title").ok()?;
    let anchor_selector = Selector::parse("a").ok()?;
    let snippet_selector = Selector::parse(".result__snippet").ok()?;

    let document = Html::parse_document(html);
    let mut results = Vec::new();

    for block in document.select(&result_selector) {
        if results.len() >= max_results {
            break;
        }

        let title_elem = match block.select(&title_selector).next() {
            Some(elem) => elem,
            None => continue,
        };
        let anchor = match title_elem.select(&anchor_selector).next() {
            Some(elem) => elem,
            None => continue,
        };

        let href = anchor.value().attr("href").unwrap_or("");
        if href.contains(AD_MARKER) {
            continue;
        }

        let title = element_text(anchor);
        let link = unwrap_redirect_link(href);
        let snippet = block
            .select(&snippet_selector)
            .next()
            .map(element_text)
            .unwrap_or_default();

        results.push(SearchResult {
            title,
            link,
            snippet,
            position: results.len() + 1,
        });
    }

    Some(results)
}

/// Collects the visible text of an element, trimmed
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Unwraps a DuckDuckGo redirect-wrapper link to its real destination
///
/// Wrapper links carry the destination percent-encoded in the `uddg` query
/// parameter, e.g. `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=...`.
/// Links without the wrapper prefix pass through unchanged, as does the raw
/// link when the parameter value fails to decode.
fn unwrap_redirect_link(href: &str) -> String {
    if let Some(encoded) = href.strip_prefix(REDIRECT_PREFIX) {
        let encoded = encoded.split('&').next().unwrap_or(encoded);
        match urlencoding::decode(encoded) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => href.to_string(),
        }
    } else {
        href.to_string()
    }
}

/// Renders a result sequence in a natural-language style for LLM callers
///
/// An empty sequence renders as a fixed advisory sentence; a non-empty one
/// renders a count header followed by one block per result, blank-line
/// separated.
pub fn format_results_for_llm(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return NO_RESULTS_ADVISORY.to_string();
    }

    let mut output = Vec::new();
    output.push(format!("Found {} search results:\n", results.len()));

    for result in results {
        output.push(format!("{}. {}", result.position, result.title));
        output.push(format!("   URL: {}", result.link));
        output.push(format!("   Summary: {}", result.snippet));
        output.push(String::new());
    }

    output.join("\n")
}
