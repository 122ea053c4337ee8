//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `BAKERY_HOST` - Bind address (default: 127.0.0.1)
//! - `BAKERY_PORT` - Listen port (default: 3000)
//! - `BAKERY_BASE_URL` - Public URL (default: <http://localhost:3000>); an
//!   `https://` URL turns on secure session cookies
//! - `BAKERY_CONTENT_DIR` - Directory holding `catalog.json`
//!   (default: crates/storefront/content)
//! - `BAKERY_TRUST_PROXY` - `true` when a reverse proxy (Cloudflare, Fly)
//!   sets `cf-connecting-ip` / `x-real-ip` / `x-forwarded-for`; the form rate
//!   limiter keys on the TCP peer otherwise (default: false)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Performance trace sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Default location of the content directory, relative to the workspace root.
pub const DEFAULT_CONTENT_DIR: &str = "crates/storefront/content";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Directory holding the catalog content file
    pub content_dir: PathBuf,
    /// Whether client IP headers come from a trusted reverse proxy
    pub trust_proxy: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name (e.g. "production")
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced by Sentry
    pub sentry_traces_sample_rate: f32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            trust_proxy: false,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_env_or_default("BAKERY_HOST", "127.0.0.1")?;
        let port = parse_env_or_default("BAKERY_PORT", "3000")?;
        let base_url = get_env_or_default("BAKERY_BASE_URL", "http://localhost:3000");
        validate_base_url(&base_url, "BAKERY_BASE_URL")?;
        let content_dir = PathBuf::from(get_env_or_default(
            "BAKERY_CONTENT_DIR",
            DEFAULT_CONTENT_DIR,
        ));
        let trust_proxy = parse_env_or_default("BAKERY_TRUST_PROXY", "false")?;

        let sentry_sample_rate = parse_sample_rate("SENTRY_SAMPLE_RATE", "1.0")?;
        let sentry_traces_sample_rate = parse_sample_rate("SENTRY_TRACES_SAMPLE_RATE", "0.0")?;

        Ok(Self {
            host,
            port,
            base_url,
            content_dir,
            trust_proxy,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the storefront is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }

    /// Path of the catalog content file.
    #[must_use]
    pub fn catalog_path(&self) -> PathBuf {
        self.content_dir.join(crate::content::CATALOG_FILE)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating blank values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env_or_default<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    parse_value(key, &get_env_or_default(key, default))
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse a sample rate, which must lie within 0.0..=1.0.
fn parse_sample_rate(key: &str, default: &str) -> Result<f32, ConfigError> {
    let rate: f32 = parse_env_or_default(key, default)?;
    validate_sample_rate(rate, key)
}

fn validate_sample_rate(rate: f32, key: &str) -> Result<f32, ConfigError> {
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ))
    }
}

/// Validate that a base URL uses an HTTP scheme.
fn validate_base_url(url: &str, key: &str) -> Result<(), ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must start with http:// or https://".to_string(),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "0.0.0.0".parse().unwrap(),
            port: 8080,
            ..StorefrontConfig::default()
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "0.0.0.0");
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert!(!config.is_secure());
        assert!(!config.trust_proxy);
        assert_eq!(
            config.catalog_path(),
            PathBuf::from("crates/storefront/content/catalog.json")
        );
    }

    #[test]
    fn test_is_secure() {
        let config = StorefrontConfig {
            base_url: "https://pekarnya.example".to_string(),
            ..StorefrontConfig::default()
        };
        assert!(config.is_secure());
    }

    #[test]
    fn test_parse_value_invalid_port() {
        let result = parse_value::<u16>("BAKERY_PORT", "99999");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(key, _)) if key == "BAKERY_PORT"));
    }

    #[test]
    fn test_parse_value_host() {
        let host: IpAddr = parse_value("BAKERY_HOST", " 10.0.0.1 ").unwrap();
        assert_eq!(host.to_string(), "10.0.0.1");
    }

    #[test]
    fn test_parse_value_trust_proxy() {
        assert!(parse_value::<bool>("BAKERY_TRUST_PROXY", "true").unwrap());
        assert!(!parse_value::<bool>("BAKERY_TRUST_PROXY", " false ").unwrap());
        assert!(parse_value::<bool>("BAKERY_TRUST_PROXY", "yes").is_err());
    }

    #[test]
    fn test_validate_sample_rate() {
        assert!(validate_sample_rate(0.0, "RATE").is_ok());
        assert!(validate_sample_rate(1.0, "RATE").is_ok());
        assert!(validate_sample_rate(1.5, "RATE").is_err());
        assert!(validate_sample_rate(-0.1, "RATE").is_err());
    }

    #[test]
    fn test_validate_base_url() {
        assert!(validate_base_url("http://localhost:3000", "URL").is_ok());
        assert!(validate_base_url("https://pekarnya.example", "URL").is_ok());
        assert!(validate_base_url("localhost:3000", "URL").is_err());
    }
}
