//! Client code written against the target payment shape only.

use serde::Serialize;

use super::gateway::PaymentGateway;
use super::receipt::PaymentReceipt;
use crate::compose::Operation;
use crate::money::Dollars;
use crate::outcome::Outcome;

/// What processing one order produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    /// Amount the order was processed for.
    pub total: Dollars,
    /// Whether a payment was made.
    pub outcome: Outcome,
    /// Receipt of the provider call, if one was made.
    pub receipt: Option<PaymentReceipt>,
    /// Console lines, in order.
    pub lines: Vec<String>,
}

impl OrderSummary {
    /// Returns `true` if the payment went through.
    pub const fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}

pub(crate) fn opening_line(total: Dollars) -> String {
    format!("--- Processing an order of {total} ---")
}

pub(crate) const SUCCESS_LINE: &str = "--- Order processed successfully! ---";

/// Processes an order through any operation with the payment shape.
///
/// The client knows nothing about which provider sits behind `gateway`;
/// any closure or adapter taking [`Dollars`] and returning a
/// [`PaymentReceipt`] works. The gateway is invoked exactly once.
pub fn process_order<Gateway>(gateway: &Gateway, total: Dollars) -> OrderSummary
where
    Gateway: Operation<Dollars, Output = PaymentReceipt> + ?Sized,
{
    let receipt = gateway.invoke(total);
    let mut lines = Vec::with_capacity(receipt.transcript.len() + 2);
    lines.push(opening_line(total));
    lines.extend(receipt.transcript.iter().cloned());
    lines.push(SUCCESS_LINE.to_string());
    OrderSummary {
        total,
        outcome: Outcome::succeeded(format!("Paid {total} via {}.", receipt.provider)),
        receipt: Some(receipt),
        lines,
    }
}

/// Processes an order through a [`PaymentGateway`] trait object.
pub fn process_order_with(gateway: &dyn PaymentGateway, total: Dollars) -> OrderSummary {
    process_order(&|amount: Dollars| gateway.pay(amount), total)
}
