use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Environment variable naming the SafeSearch level
pub const SAFE_SEARCH_ENV: &str = "DDG_SAFE_SEARCH";

/// Environment variable naming the default region code
pub const REGION_ENV: &str = "DDG_REGION";

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    let config: Config = toml::from_str(&content)?;

    validate(&config)?;

    Ok(config)
}

/// Builds a configuration from defaults plus environment overrides
///
/// Reads `DDG_SAFE_SEARCH` and `DDG_REGION`, the deployment contract for
/// running the server without a config file. Every other setting keeps its
/// default.
pub fn config_from_env() -> Config {
    let mut config = Config::default();

    if let Ok(value) = std::env::var(SAFE_SEARCH_ENV) {
        config.search.safe_search = value;
    }
    if let Ok(value) = std::env::var(REGION_ENV) {
        config.search.region = value;
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[search]
safe-search = "strict"
region = "us-en"
requests-per-minute = 15
max-results = 5

[fetch]
requests-per-minute = 10
timeout-secs = 20
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.search.safe_search, "strict");
        assert_eq!(config.search.region, "us-en");
        assert_eq!(config.search.requests_per_minute, 15);
        assert_eq!(config.search.max_results, 5);
        assert_eq!(config.fetch.requests_per_minute, 10);
        assert_eq!(config.fetch.timeout_secs, 20);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let file = create_temp_config("");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.search.requests_per_minute, 30);
        assert_eq!(config.fetch.requests_per_minute, 20);
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let config_content = r#"
[search]
region = "jp-ja"
"#;
        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.search.region, "jp-ja");
        assert_eq!(config.search.safe_search, "moderate");
        assert_eq!(config.search.max_results, 10);
    }

    #[test]
    fn test_config_from_env_overrides() {
        std::env::set_var(SAFE_SEARCH_ENV, "off");
        std::env::set_var(REGION_ENV, "cn-zh");

        let config = config_from_env();
        assert_eq!(config.search.safe_search, "off");
        assert_eq!(config.search.region, "cn-zh");

        std::env::remove_var(SAFE_SEARCH_ENV);
        std::env::remove_var(REGION_ENV);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[search]
requests-per-minute = 0
"#;
        let file = create_temp_config(config_content);
        let result = load_config(file.path());

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            crate::ConfigError::Validation(_)
        ));
    }
}
