//! The three order subsystems and their simulated implementations.
//!
//! Each subsystem is a trait with a single method returning an [`Outcome`].
//! Closures with the matching signature implement the traits too, so tests
//! can swap in recording stand-ins.

use tracing::{info, warn};

use crate::config::StoreConfig;
use crate::money::Dollars;
use crate::outcome::Outcome;

/// Checks whether enough stock is available.
pub trait Inventory {
    /// Checks stock for `quantity` units of `product_id`.
    fn check_stock(&self, product_id: &str, quantity: u32) -> Outcome;
}

/// Charges a card.
pub trait Payments {
    /// Charges `amount` to `credit_card`.
    fn process_payment(&self, credit_card: &str, amount: Dollars) -> Outcome;
}

/// Ships products.
pub trait Shipping {
    /// Creates a shipment of `product_id` to `address`.
    fn create_shipment(&self, product_id: &str, address: &str) -> Outcome;
}

impl<F> Inventory for F
where
    F: Fn(&str, u32) -> Outcome,
{
    fn check_stock(&self, product_id: &str, quantity: u32) -> Outcome {
        self(product_id, quantity)
    }
}

impl<F> Payments for F
where
    F: Fn(&str, Dollars) -> Outcome,
{
    fn process_payment(&self, credit_card: &str, amount: Dollars) -> Outcome {
        self(credit_card, amount)
    }
}

impl<F> Shipping for F
where
    F: Fn(&str, &str) -> Outcome,
{
    fn create_shipment(&self, product_id: &str, address: &str) -> Outcome {
        self(product_id, address)
    }
}

/// Inventory that has stock for any order below a fixed quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedInventory {
    stock_limit: u32,
}

impl SimulatedInventory {
    /// Creates an inventory where orders of `stock_limit` units or more fail.
    #[must_use]
    pub const fn new(stock_limit: u32) -> Self {
        Self { stock_limit }
    }
}

impl Default for SimulatedInventory {
    fn default() -> Self {
        Self::new(StoreConfig::default().stock_limit)
    }
}

impl Inventory for SimulatedInventory {
    fn check_stock(&self, product_id: &str, quantity: u32) -> Outcome {
        if quantity < self.stock_limit {
            info!(product_id, quantity, "stock available");
            Outcome::succeeded("Stock is available.")
        } else {
            warn!(product_id, quantity, limit = self.stock_limit, "stock not available");
            Outcome::failed("Stock is NOT available.")
        }
    }
}

/// Payment processor that accepts exactly one card number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedPayments {
    accepted_card: String,
}

impl SimulatedPayments {
    /// Creates a processor that only accepts `accepted_card`.
    #[must_use]
    pub fn new(accepted_card: impl Into<String>) -> Self {
        Self {
            accepted_card: accepted_card.into(),
        }
    }
}

impl Default for SimulatedPayments {
    fn default() -> Self {
        Self::new(StoreConfig::default().accepted_card)
    }
}

impl Payments for SimulatedPayments {
    fn process_payment(&self, credit_card: &str, amount: Dollars) -> Outcome {
        if credit_card == self.accepted_card {
            info!(%amount, "payment accepted");
            Outcome::succeeded("Payment successful !")
        } else {
            warn!(%amount, "payment rejected");
            Outcome::failed("Payment failed (invalid card).")
        }
    }
}

/// Shipping service that always succeeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatedShipping;

impl Shipping for SimulatedShipping {
    fn create_shipment(&self, product_id: &str, address: &str) -> Outcome {
        info!(product_id, address, "shipment created");
        Outcome::succeeded("Shipment created !.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, true)]
    #[case(99, true)]
    #[case(100, false)]
    #[case(250, false)]
    fn test_stock_limit_is_exclusive(#[case] quantity: u32, #[case] expected: bool) {
        let outcome = SimulatedInventory::default().check_stock("shampoo", quantity);
        assert_eq!(outcome.is_success(), expected);
    }

    #[rstest]
    #[case("1", true)]
    #[case("2", false)]
    #[case("", false)]
    fn test_only_accepted_card_pays(#[case] card: &str, #[case] expected: bool) {
        let outcome = SimulatedPayments::default().process_payment(card, Dollars::ZERO);
        assert_eq!(outcome.is_success(), expected);
    }

    #[rstest]
    fn test_shipping_always_succeeds() {
        let outcome = SimulatedShipping.create_shipment("sokar", "nowhere");
        assert_eq!(outcome, Outcome::succeeded("Shipment created !."));
    }

    #[rstest]
    fn test_closure_is_a_subsystem() {
        let inventory = |_: &str, quantity: u32| {
            if quantity == 0 {
                Outcome::failed("empty")
            } else {
                Outcome::succeeded("ok")
            }
        };
        assert!(!inventory.check_stock("x", 0).is_success());
        assert!(inventory.check_stock("x", 3).is_success());
    }
}
