//! Configuration module for ddg-scout
//!
//! Configuration is resolved once at process start and fixed thereafter:
//! either from a TOML file, or from defaults plus the `DDG_SAFE_SEARCH` /
//! `DDG_REGION` environment variables.
//!
//! # Example
//!
//! ```no_run
//! use ddg_scout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Search budget: {}/min", config.search.requests_per_minute);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetchConfig, SearchConfig};

// Re-export parser functions
pub use parser::{config_from_env, load_config, REGION_ENV, SAFE_SEARCH_ENV};
