//! Configuration Module
//!
//! Handles loading client configuration from environment variables and
//! command-line overrides.

use std::env;
use std::time::Duration;

use crate::cli::Cli;

/// Default PokeAPI root. The trailing slash matters for `Url::join`.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Cache reap interval in milliseconds
    pub cache_interval_ms: u64,
    /// PokeAPI base URL
    pub base_url: String,
    /// Per-request HTTP timeout in seconds
    pub http_timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_INTERVAL_MS` - Cache reap interval (default: 60000)
    /// - `POKEAPI_BASE_URL` - API root (default: https://pokeapi.co/api/v2/)
    /// - `POKEDEX_HTTP_TIMEOUT_SECS` - Request timeout (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_interval_ms: env::var("POKEDEX_CACHE_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_interval_ms),
            base_url: env::var("POKEAPI_BASE_URL").unwrap_or(defaults.base_url),
            http_timeout_secs: env::var("POKEDEX_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.http_timeout_secs),
        }
    }

    /// Overrides fields with any flags given on the command line.
    pub fn apply_cli(mut self, cli: &Cli) -> Self {
        if let Some(ms) = cli.cache_interval_ms {
            self.cache_interval_ms = ms;
        }
        if let Some(url) = &cli.base_url {
            self.base_url = url.clone();
        }
        if let Some(secs) = cli.timeout_secs {
            self.http_timeout_secs = secs;
        }
        self
    }

    pub fn cache_interval(&self) -> Duration {
        Duration::from_millis(self.cache_interval_ms)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval_ms: 60_000,
            base_url: DEFAULT_BASE_URL.to_string(),
            http_timeout_secs: 10,
        }
    }
}
