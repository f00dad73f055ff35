//! Configuration loading from environment variables.

use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Default backend base URL when `MEDIALIB_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:5050";

/// Runtime configuration for the media library client.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the asset backend, without a trailing slash.
    pub api_url: String,
    /// Debounce applied to as-you-type autocomplete queries.
    pub search_debounce: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("MEDIALIB_API_URL")
                .ok()
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            search_debounce: Duration::from_millis(
                env::var("MEDIALIB_SEARCH_DEBOUNCE_MS")
                    .ok()
                    .and_then(|ms| ms.parse().ok())
                    .unwrap_or(300),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, DEFAULT_API_URL};
    use std::env;
    use std::time::Duration;

    // Single test so the env mutations cannot race a parallel reader.
    #[test]
    fn from_env_applies_defaults_overrides_and_url_trimming() {
        env::remove_var("MEDIALIB_API_URL");
        env::remove_var("MEDIALIB_SEARCH_DEBOUNCE_MS");
        let config = Config::from_env();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.search_debounce, Duration::from_millis(300));

        env::set_var("MEDIALIB_API_URL", "http://assets.internal:9000/");
        env::set_var("MEDIALIB_SEARCH_DEBOUNCE_MS", "150");
        let config = Config::from_env();
        assert_eq!(config.api_url, "http://assets.internal:9000");
        assert_eq!(config.search_debounce, Duration::from_millis(150));

        // Unparseable debounce and empty URL fall back to defaults.
        env::set_var("MEDIALIB_API_URL", "");
        env::set_var("MEDIALIB_SEARCH_DEBOUNCE_MS", "soon");
        let config = Config::from_env();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.search_debounce, Duration::from_millis(300));

        env::remove_var("MEDIALIB_API_URL");
        env::remove_var("MEDIALIB_SEARCH_DEBOUNCE_MS");
    }
}
