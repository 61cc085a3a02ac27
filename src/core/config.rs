//! Configuration management for the MCP server.
//!
//! Configuration is assembled from defaults, an optional `.env` file and
//! environment variables. Command-line flags are layered on top in `cli.rs`.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default base URL of the Exchange Rates Data API.
pub const DEFAULT_BASE_URL: &str = "https://api.apilayer.com/exchangerates_data";

/// Default upstream request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Exchange Rates API settings.
    pub upstream: UpstreamConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Settings for the Exchange Rates Data API.
#[derive(Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL every request path is appended to.
    pub base_url: String,

    /// API key sent in the `apikey` header. Requests are still attempted
    /// without one; the upstream then answers with an auth error.
    pub api_key: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "exchange-rates-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            upstream: UpstreamConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first, if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        if let Ok(api_key) = std::env::var("EXCHANGE_RATES_API_KEY") {
            if !api_key.trim().is_empty() {
                config.upstream.api_key = Some(api_key);
            }
        }

        if let Ok(base_url) = std::env::var("EXCHANGE_RATES_BASE_URL") {
            config.upstream.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("EXCHANGE_RATES_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.upstream.timeout_secs = secs,
                Err(_) => warn!(
                    "Invalid EXCHANGE_RATES_TIMEOUT_SECS '{}', using {}s",
                    timeout, DEFAULT_TIMEOUT_SECS
                ),
            }
        }

        config
    }

    /// Whether an upstream API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.upstream.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_upstream_env() {
        unsafe {
            std::env::remove_var("EXCHANGE_RATES_API_KEY");
            std::env::remove_var("EXCHANGE_RATES_BASE_URL");
            std::env::remove_var("EXCHANGE_RATES_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_api_key_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_upstream_env();
        unsafe {
            std::env::set_var("EXCHANGE_RATES_API_KEY", "test_key_12345");
        }
        let config = Config::from_env();
        assert_eq!(config.upstream.api_key.as_deref(), Some("test_key_12345"));
        assert!(config.has_api_key());
        clear_upstream_env();
    }

    #[test]
    fn test_blank_api_key_is_ignored() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_upstream_env();
        unsafe {
            std::env::set_var("EXCHANGE_RATES_API_KEY", "   ");
        }
        let config = Config::from_env();
        assert!(config.upstream.api_key.is_none());
        clear_upstream_env();
    }

    #[test]
    fn test_upstream_overrides_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_upstream_env();
        unsafe {
            std::env::set_var("EXCHANGE_RATES_BASE_URL", "http://localhost:9999/api");
            std::env::set_var("EXCHANGE_RATES_TIMEOUT_SECS", "5");
        }
        let config = Config::from_env();
        assert_eq!(config.upstream.base_url, "http://localhost:9999/api");
        assert_eq!(config.upstream.timeout_secs, 5);
        clear_upstream_env();
    }

    #[test]
    fn test_invalid_timeout_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_upstream_env();
        unsafe {
            std::env::set_var("EXCHANGE_RATES_TIMEOUT_SECS", "soon");
        }
        let config = Config::from_env();
        assert_eq!(config.upstream.timeout_secs, DEFAULT_TIMEOUT_SECS);
        clear_upstream_env();
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let upstream = UpstreamConfig {
            api_key: Some("super_secret_key".to_string()),
            ..Default::default()
        };
        let debug_str = format!("{:?}", upstream);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));

        let config = Config {
            upstream,
            ..Default::default()
        };
        assert!(!format!("{:?}", config).contains("super_secret_key"));
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.upstream.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.upstream.timeout_secs, 30);
        assert!(!config.has_api_key());
        assert_eq!(config.logging.level, "info");
    }
}
