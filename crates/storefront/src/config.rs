//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CART_HOST` - Bind address (default: 127.0.0.1)
//! - `CART_PORT` - Listen port (default: 3000)
//! - `CART_BASE_URL` - Public URL for the storefront (default: <http://localhost:3000>)
//! - `CART_DEFAULT_CURRENCY` - ISO 4217 code for empty carts (default: USD)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

use pineapple_cart_core::DEFAULT_CURRENCY_CODE;

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
    /// Cart engine configuration
    pub cart: CartConfig,
}

/// Cart engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Currency used for carts with no lines
    pub default_currency: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            default_currency: DEFAULT_CURRENCY_CODE.to_string(),
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
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("CART_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("CART_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("CART_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("CART_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("CART_BASE_URL", "http://localhost:3000");
        let cart = CartConfig::from_env()?;

        Ok(Self {
            host,
            port,
            base_url,
            cart,
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
}

impl CartConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let default_currency = get_env_or_default("CART_DEFAULT_CURRENCY", DEFAULT_CURRENCY_CODE);
        validate_currency_code(&default_currency, "CART_DEFAULT_CURRENCY")?;
        Ok(Self { default_currency })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that a value looks like an ISO 4217 code (three uppercase letters).
fn validate_currency_code(code: &str, var_name: &str) -> Result<(), ConfigError> {
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase()) {
        return Ok(());
    }
    Err(ConfigError::InvalidEnvVar(
        var_name.to_string(),
        format!("'{code}' is not a three-letter ISO 4217 currency code"),
    ))
}
