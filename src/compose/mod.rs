//! Operation composition utilities.
//!
//! This module provides the mechanism every pattern in the crate is built
//! on: a base operation, wrapper factories that return a new operation of
//! the same shape, and drivers that stack those wrappers in order.
//!
//! # Overview
//!
//! - [`Operation`]: anything callable with one input, including every
//!   `Fn(Input) -> Output` closure
//! - [`BoxedOperation`]: an owned, type-erased operation so chains of any
//!   depth share one nameable type
//! - [`WrapperFactory`]: a plain function `BoxedOperation -> BoxedOperation`
//! - [`wrap!`]: applies wrapper factories left to right
//! - [`Chain`]: a builder that records how many wrappers were applied
//! - [`apply_all`]: folds an iterator of wrapper factories over a base
//!
//! # Helper Functions
//!
//! - [`boxed`]: erases a closure into a [`BoxedOperation`]
//! - [`identity_wrapper`]: the wrapper that changes nothing
//! - [`map_output`]: builds a wrapper that post-processes the result
//! - [`map_input`]: builds a wrapper that pre-processes the input
//! - [`adapt`]: bridges an operation that expects a different input type
//!
//! # Examples
//!
//! ## Stacking wrappers
//!
//! ```
//! use structural_patterns::compose::{boxed, map_output, BoxedOperation};
//! use structural_patterns::wrap;
//!
//! let base: BoxedOperation<i32, i32> = boxed(|x: i32| x + 1);
//! let doubled = wrap!(base, map_output(|x: i32| x * 2), map_output(|x: i32| x - 3));
//!
//! // The last wrapper runs outermost: ((5 + 1) * 2) - 3
//! assert_eq!(doubled(5), 9);
//! ```
//!
//! ## Folding a list of wrappers
//!
//! ```
//! use structural_patterns::compose::{apply_all, boxed, BoxedOperation, WrapperFactory};
//!
//! fn shout(operation: BoxedOperation<(), String>) -> BoxedOperation<(), String> {
//!     Box::new(move |()| operation(()).to_uppercase())
//! }
//!
//! fn exclaim(operation: BoxedOperation<(), String>) -> BoxedOperation<(), String> {
//!     Box::new(move |()| operation(()) + "!")
//! }
//!
//! let wrappers: [WrapperFactory<(), String>; 2] = [shout, exclaim];
//! let greeting = apply_all(boxed(|()| "hello".to_string()), wrappers);
//!
//! assert_eq!(greeting(()), "HELLO!");
//! ```
//!
//! # Laws
//!
//! - **Left Identity**: `wrap!(op, identity_wrapper, f)` behaves like `wrap!(op, f)`
//! - **Right Identity**: `wrap!(op, f, identity_wrapper)` behaves like `wrap!(op, f)`
//! - **Associativity**: `wrap!(op, f, g)` behaves like `wrap!(wrap!(op, f), g)`
//! - **Signature Preservation**: every wrapper returns the shape it was given

mod chain;
mod operation;
mod utils;
mod wrap_macro;

pub use chain::{Chain, WrapperFactory, apply_all};
pub use operation::{BoxedOperation, Operation, boxed};
pub use utils::{adapt, identity_wrapper, map_input, map_output};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::wrap;
