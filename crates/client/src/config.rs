//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional and defaulted:
//! - `RECIPE_BOX_API_BASE_URL` - Base URL of the remote record service
//!   (default: `http://localhost:8080`)
//! - `RECIPE_BOX_SESSION_DIR` - Directory for the durable session slot
//!   (default: `.recipe-box`)
//! - `RECIPE_BOX_HTTP_TIMEOUT_SECS` - Per-request timeout in seconds
//!   (default: 30)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_SESSION_DIR: &str = ".recipe-box";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote record service.
    pub api_base_url: Url,
    /// Directory holding the durable session slot.
    pub session_dir: PathBuf,
    /// Per-request HTTP timeout.
    pub http_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base_url = get_env_or_default("RECIPE_BOX_API_BASE_URL", DEFAULT_BASE_URL)
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("RECIPE_BOX_API_BASE_URL".to_string(), e.to_string())
            })?;

        let session_dir =
            PathBuf::from(get_env_or_default("RECIPE_BOX_SESSION_DIR", DEFAULT_SESSION_DIR));

        let timeout_secs = get_env_or_default(
            "RECIPE_BOX_HTTP_TIMEOUT_SECS",
            &DEFAULT_HTTP_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("RECIPE_BOX_HTTP_TIMEOUT_SECS".to_string(), e.to_string())
        })?;

        Ok(Self {
            api_base_url,
            session_dir,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // DEFAULT_BASE_URL is a valid URL, parsing cannot fail
            #[allow(clippy::unwrap_used)]
            api_base_url: DEFAULT_BASE_URL.parse().unwrap(),
            session_dir: PathBuf::from(DEFAULT_SESSION_DIR),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_base_url.as_str(), "http://localhost:8080/");
        assert_eq!(config.session_dir, PathBuf::from(".recipe-box"));
        assert_eq!(config.http_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_get_env_or_default_falls_back() {
        let value = get_env_or_default("RECIPE_BOX_DOES_NOT_EXIST", "fallback");
        assert_eq!(value, "fallback");
    }
}
