//! Store configuration for the simulated order subsystems.
//!
//! Values come from environment variables. Every variable is optional and
//! falls back to the demo defaults, so an empty environment is valid.
//!
//! # Example
//!
//! ```rust
//! use structural_patterns::config::StoreConfig;
//!
//! let config = StoreConfig::from_lookup(|key| match key {
//!     "STORE_STOCK_LIMIT" => Some("10".to_string()),
//!     _ => None,
//! })?;
//! assert_eq!(config.stock_limit, 10);
//! assert_eq!(config.accepted_card, "1");
//! # Ok::<(), structural_patterns::config::ConfigError>(())
//! ```

use std::env;
use std::num::ParseIntError;

use thiserror::Error;

/// Environment variable holding the exclusive stock limit.
pub const STOCK_LIMIT_KEY: &str = "STORE_STOCK_LIMIT";

/// Environment variable holding the card number the payment simulator accepts.
pub const ACCEPTED_CARD_KEY: &str = "STORE_ACCEPTED_CARD";

const DEFAULT_STOCK_LIMIT: u32 = 100;
const DEFAULT_ACCEPTED_CARD: &str = "1";

/// Errors raised while loading [`StoreConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Settings for the simulated inventory and payment subsystems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Orders for this many units or more are out of stock.
    pub stock_limit: u32,
    /// The only card number the payment simulator accepts.
    pub accepted_card: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            stock_limit: DEFAULT_STOCK_LIMIT,
            accepted_card: DEFAULT_ACCEPTED_CARD.to_string(),
        }
    }
}

impl StoreConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Environment Variables
    ///
    /// - `STORE_STOCK_LIMIT`: exclusive stock limit (optional, default: 100)
    /// - `STORE_ACCEPTED_CARD`: accepted card number (optional, default: "1")
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup` instead of the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the stock limit is not an
    /// unsigned integer or the accepted card is blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let stock_limit = lookup(STOCK_LIMIT_KEY).map_or(Ok(DEFAULT_STOCK_LIMIT), |value| {
            value
                .trim()
                .parse()
                .map_err(|error: ParseIntError| invalid(STOCK_LIMIT_KEY, error.to_string()))
        })?;

        let accepted_card = match lookup(ACCEPTED_CARD_KEY) {
            None => DEFAULT_ACCEPTED_CARD.to_string(),
            Some(card) if card.trim().is_empty() => {
                return Err(invalid(ACCEPTED_CARD_KEY, "must not be blank".to_string()));
            }
            Some(card) => card.trim().to_string(),
        };

        Ok(Self {
            stock_limit,
            accepted_card,
        })
    }
}

fn invalid(key: &str, message: String) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message,
    }
}
