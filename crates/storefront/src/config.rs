//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CATALOG_BASE_URL` - Base URL of the product catalog API
//!   (default: `https://fakestoreapi.com`)
//! - `CATALOG_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
//! - `CATALOG_CURRENCY` - ISO 4217 code the catalog prices are quoted in
//!   (default: USD)

use std::time::Duration;

use greenbasket_core::CurrencyCode;
use thiserror::Error;

/// Default base URL for the public product catalog.
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://fakestoreapi.com";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Product catalog API configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog API, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Currency the catalog quotes prices in.
    pub currency_code: CurrencyCode,
}

impl CatalogConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] when a variable is set but
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("CATALOG_BASE_URL")
            .map_or_else(|_| DEFAULT_CATALOG_BASE_URL.to_owned(), normalize_base_url);

        let timeout = match std::env::var("CATALOG_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    ConfigError::InvalidEnvVar(
                        "CATALOG_TIMEOUT_SECS".to_owned(),
                        format!("expected a number of seconds, got {raw:?}"),
                    )
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let currency_code = match std::env::var("CATALOG_CURRENCY") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| ConfigError::InvalidEnvVar("CATALOG_CURRENCY".to_owned(), e))?,
            Err(_) => CurrencyCode::default(),
        };

        Ok(Self {
            base_url,
            timeout,
            currency_code,
        })
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            currency_code: CurrencyCode::default(),
        }
    }
}

fn normalize_base_url(raw: String) -> String {
    raw.trim_end_matches('/').to_owned()
}
