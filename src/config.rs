use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Settings for the document fetcher.
///
/// Only the network boundary is configurable. Pipeline thresholds (container
/// bounds, score floors) are tuning parameters of the algorithm and stay
/// constants in code.
#[derive(Debug, Deserialize, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

impl FetchConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with INGREDIENT__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: INGREDIENT__TIMEOUT_SECS
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("INGREDIENT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout_secs, 10);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let result = FetchConfig::load();
        // No config file in the test environment; defaults must apply
        // unless INGREDIENT__ variables are set.
        if std::env::vars().all(|(k, _)| !k.starts_with("INGREDIENT__")) {
            let config = result.unwrap();
            assert_eq!(config.timeout_secs, 10);
        }
    }
}
