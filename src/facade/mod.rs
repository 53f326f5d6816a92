//! Facade: one entry point for a multi-step order.
//!
//! Placing an order takes three dependent subsystem calls: check stock,
//! charge the card, create the shipment. Each returns an
//! [`Outcome`](crate::outcome::Outcome). The facade runs them in that order
//! and stops at the first failure, so a caller needs a single call instead of
//! three nested checks.
//!
//! Two forms are provided:
//!
//! - [`OrderFacade`], which owns one implementation of each subsystem trait
//! - [`place_order`], which takes the three subsystem calls as closures
//!
//! Both produce an [`OrderReport`] holding the terminal [`OrderState`] and
//! the transcript of the run.
//!
//! # Examples
//!
//! ```rust
//! use structural_patterns::facade::{OrderFacade, OrderRequest, OrderStep};
//!
//! let facade = OrderFacade::default();
//! let request = OrderRequest::new("sokar", 1, "2", 150.0, "456 Oak Ave, Othertown, USA")?;
//! let report = facade.place_order(&request);
//!
//! assert_eq!(report.failed_step(), Some(OrderStep::Payment));
//! assert!(!report.transcript.iter().any(|line| line.starts_with("Creating shipment")));
//! # Ok::<(), structural_patterns::money::AmountError>(())
//! ```

mod coordinator;
mod request;
mod state;
mod subsystems;

pub use coordinator::{OrderFacade, place_order};
pub use request::OrderRequest;
pub use state::{OrderReport, OrderState, OrderStep};
pub use subsystems::{
    Inventory, Payments, Shipping, SimulatedInventory, SimulatedPayments, SimulatedShipping,
};
