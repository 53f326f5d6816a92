//! Tracing setup shared by the demo binaries.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is left to the binary, which calls [`init_tracing`] once at startup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set.
///
/// Demo output goes to stdout, so the subscriber stays quiet unless asked.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs a formatting subscriber filtered by `RUST_LOG`.
///
/// Falls back to `default_filter` when the environment variable is absent or
/// cannot be parsed.
///
/// # Errors
///
/// Returns [`Error::Logging`](crate::Error::Logging) if a global subscriber
/// has already been installed.
pub fn init_tracing(default_filter: &str) -> crate::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|error| crate::Error::Logging(error.to_string()))
}
