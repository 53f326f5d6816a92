//! Crate-level error type.
//!
//! Subsystem failures inside the patterns are reported as checked
//! [`Outcome`](crate::outcome::Outcome) values and never reach this type.
//! [`Error`] only covers the places where a value cannot be constructed at
//! all: an invalid dollar amount or an invalid configuration value.

use thiserror::Error;

/// Errors raised while building the inputs of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A dollar amount could not be represented.
    #[cfg(any(feature = "adapter", feature = "facade"))]
    #[error(transparent)]
    Amount(#[from] crate::money::AmountError),

    /// A configuration value could not be loaded.
    #[cfg(feature = "facade")]
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// The global tracing subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
