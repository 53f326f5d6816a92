//! What a simulated provider call did.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

/// The external payment provider that handled a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Provider {
    /// Card payments, amounts in cents.
    Stripe,
    /// Email payments, amounts in dollars.
    PayPal,
}

impl fmt::Display for Provider {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stripe => write!(formatter, "Stripe"),
            Self::PayPal => write!(formatter, "PayPal"),
        }
    }
}

/// Direction of the money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PaymentAction {
    /// Money taken from the customer.
    Charge,
    /// Money returned to the customer.
    Refund,
}

/// An amount in the provider's own unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProviderAmount {
    /// Whole cents.
    Cents(i64),
    /// Decimal dollars.
    Dollars(Decimal),
}

impl fmt::Display for ProviderAmount {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cents(cents) => write!(formatter, "${:.2}", Decimal::new(*cents, 2)),
            Self::Dollars(dollars) => write!(formatter, "${dollars:.2}"),
        }
    }
}

/// Record of one simulated provider call.
///
/// The transcript holds the console lines describing the call, outermost
/// layer first. Invoking the same operation twice with the same amount
/// produces equal receipts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentReceipt {
    /// Provider that handled the call.
    pub provider: Provider,
    /// Charge or refund.
    pub action: PaymentAction,
    /// Card, email, transaction id or payment id the call was made against.
    pub reference: String,
    /// Amount in the provider's unit.
    pub amount: ProviderAmount,
    /// Console lines describing the call.
    pub transcript: Vec<String>,
}

impl PaymentReceipt {
    pub(crate) fn new(
        provider: Provider,
        action: PaymentAction,
        reference: &str,
        amount: ProviderAmount,
        line: String,
    ) -> Self {
        Self {
            provider,
            action,
            reference: reference.to_string(),
            amount,
            transcript: vec![line],
        }
    }

    /// Prepends a line written by a wrapping layer.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.transcript.insert(0, note.into());
        self
    }
}
