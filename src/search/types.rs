use serde::{Deserialize, Serialize};
use std::fmt;

/// A single search result in document order
///
/// Constructed once by the result parser and returned by value; `position`
/// is 1-based and contiguous over the retained results of one response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Page title
    pub title: String,

    /// Destination URL (redirect wrappers already unwrapped)
    pub link: String,

    /// Description snippet, empty when the result carries none
    pub snippet: String,

    /// 1-based rank within the response
    pub position: usize,
}

/// DuckDuckGo SafeSearch filtering level
///
/// Fixed for the lifetime of a searcher; each variant maps to a wire-level
/// `kp` filter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafeSearchMode {
    /// Most restrictive filtering
    Strict,
    /// Default filtering
    Moderate,
    /// No filtering
    Off,
}

impl SafeSearchMode {
    /// Wire-level `kp` filter code sent with search requests
    pub fn wire_code(self) -> &'static str {
        match self {
            SafeSearchMode::Strict => "1",
            SafeSearchMode::Moderate => "-1",
            SafeSearchMode::Off => "-2",
        }
    }

    /// Resolves a configured mode name, case-insensitively
    ///
    /// Returns None for unrecognized names; the caller decides the fallback.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "STRICT" => Some(SafeSearchMode::Strict),
            "MODERATE" => Some(SafeSearchMode::Moderate),
            "OFF" => Some(SafeSearchMode::Off),
            _ => None,
        }
    }
}

impl fmt::Display for SafeSearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SafeSearchMode::Strict => "STRICT",
            SafeSearchMode::Moderate => "MODERATE",
            SafeSearchMode::Off => "OFF",
        };
        f.write_str(name)
    }
}
