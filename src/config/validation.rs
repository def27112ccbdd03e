use crate::config::types::Config;
use crate::ConfigError;

/// Validates a parsed configuration
///
/// SafeSearch names are deliberately not validated here; unrecognized names
/// resolve to Moderate at construction time instead of rejecting the config.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.search.requests_per_minute == 0 {
        return Err(ConfigError::Validation(
            "search requests-per-minute must be at least 1".to_string(),
        ));
    }

    if config.fetch.requests_per_minute == 0 {
        return Err(ConfigError::Validation(
            "fetch requests-per-minute must be at least 1".to_string(),
        ));
    }

    if config.search.max_results == 0 {
        return Err(ConfigError::Validation(
            "search max-results must be at least 1".to_string(),
        ));
    }

    if config.search.timeout_secs == 0 || config.fetch.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout-secs must be at least 1".to_string(),
        ));
    }

    Ok(())
}
