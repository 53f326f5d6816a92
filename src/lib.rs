//! # structural-patterns
//!
//! Adapter, Decorator and Facade expressed as composable operations.
//!
//! ## Overview
//!
//! Every pattern in this crate is built from the same small mechanism: a
//! base operation, a set of wrapper factories that take an operation and
//! return a new one with the same call shape, and a driver that stacks the
//! wrappers and invokes the result once. The crate provides:
//!
//! - **Composition**: [`Operation`](compose::Operation), [`Chain`](compose::Chain),
//!   [`apply_all`](compose::apply_all) and the [`wrap!`] macro
//! - **Adapter**: payment providers with incompatible call shapes bridged to
//!   a single `(Dollars) -> PaymentReceipt` operation
//! - **Decorator**: a blog post response augmented per user role
//! - **Facade**: stock check, payment and shipment sequenced behind one call
//!
//! Each pattern also ships its "without pattern" counterpart so the two can
//! be compared side by side, and the demo binaries under `src/bin/` print
//! both.
//!
//! ## Feature Flags
//!
//! - `compose`: Operation composition utilities
//! - `adapter`: Payment adapters (enables `compose`)
//! - `decorator`: Response decorators (enables `compose`)
//! - `facade`: Order facade (enables `compose`)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use structural_patterns::prelude::*;
//!
//! let response = decorate_for_roles(
//!     blog_post_response(101),
//!     &[UserRole::Author, UserRole::Editor],
//! );
//! let body = response(());
//!
//! assert!(body.contains_key("stats"));
//! assert!(body.contains_key("moderation"));
//! assert!(!body.contains_key("_debug"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use structural_patterns::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "adapter")]
    pub use crate::adapter::*;

    #[cfg(feature = "decorator")]
    pub use crate::decorator::*;

    #[cfg(feature = "facade")]
    pub use crate::facade::*;

    #[cfg(any(feature = "adapter", feature = "facade"))]
    pub use crate::money::{AmountError, Dollars};

    #[cfg(any(feature = "adapter", feature = "facade"))]
    pub use crate::outcome::Outcome;

    pub use crate::error::{Error, Result};
}

pub mod error;
pub mod logging;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(any(feature = "adapter", feature = "facade"))]
pub mod money;

#[cfg(any(feature = "adapter", feature = "facade"))]
pub mod outcome;

#[cfg(feature = "adapter")]
pub mod adapter;

#[cfg(feature = "decorator")]
pub mod decorator;

#[cfg(feature = "facade")]
pub mod config;

#[cfg(feature = "facade")]
pub mod facade;

pub use error::{Error, Result};
