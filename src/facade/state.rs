//! Order progress as an explicit state machine.

use std::fmt;

use serde::Serialize;

use super::request::OrderRequest;
use crate::outcome::Outcome;

/// One of the three subsystem calls, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OrderStep {
    /// Inventory check.
    StockCheck,
    /// Card charge.
    Payment,
    /// Shipment creation.
    Shipment,
}

impl OrderStep {
    /// The line announcing this step for `request`.
    #[must_use]
    pub fn announcement(self, request: &OrderRequest) -> String {
        match self {
            Self::StockCheck => format!("Checking stock for {}...", request.product_id()),
            Self::Payment => format!("Processing payment of {}...", request.total()),
            Self::Shipment => format!(
                "Creating shipment for {} to {}...",
                request.product_id(),
                request.address()
            ),
        }
    }

    /// Short reason reported when this step fails.
    pub const fn failure_reason(self) -> &'static str {
        match self {
            Self::StockCheck => "Out of Stock",
            Self::Payment => "Payment Error",
            Self::Shipment => "Shipping Error",
        }
    }
}

impl fmt::Display for OrderStep {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::StockCheck => "stock check",
            Self::Payment => "payment",
            Self::Shipment => "shipment",
        };
        formatter.write_str(name)
    }
}

/// Where an order is in its lifecycle.
///
/// Transitions only move forward. A failed step moves to [`Failed`](Self::Failed)
/// and [`Succeeded`](Self::Succeeded) is reached only after all three steps
/// pass. Both are terminal.
///
/// # Examples
///
/// ```rust
/// use structural_patterns::facade::{OrderState, OrderStep};
/// use structural_patterns::outcome::Outcome;
///
/// let state = OrderState::Checking
///     .advance(&Outcome::succeeded("Stock is available."))
///     .advance(&Outcome::failed("Payment failed (invalid card)."));
///
/// assert_eq!(state, OrderState::Failed(OrderStep::Payment));
/// assert!(state.is_terminal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OrderState {
    /// Waiting for the stock check.
    Checking,
    /// Waiting for the payment.
    Paying,
    /// Waiting for the shipment.
    Shipping,
    /// Every step passed.
    Succeeded,
    /// The given step failed; later steps never ran.
    Failed(OrderStep),
}

impl OrderState {
    /// The step this state is waiting on, or `None` if terminal.
    pub const fn current_step(self) -> Option<OrderStep> {
        match self {
            Self::Checking => Some(OrderStep::StockCheck),
            Self::Paying => Some(OrderStep::Payment),
            Self::Shipping => Some(OrderStep::Shipment),
            Self::Succeeded | Self::Failed(_) => None,
        }
    }

    /// Returns `true` for [`Succeeded`](Self::Succeeded) and [`Failed`](Self::Failed).
    pub const fn is_terminal(self) -> bool {
        self.current_step().is_none()
    }

    /// Applies the outcome of the current step.
    ///
    /// Terminal states ignore further outcomes.
    #[must_use]
    pub const fn advance(self, outcome: &Outcome) -> Self {
        let Some(step) = self.current_step() else {
            return self;
        };
        if !outcome.is_success() {
            return Self::Failed(step);
        }
        match step {
            OrderStep::StockCheck => Self::Paying,
            OrderStep::Payment => Self::Shipping,
            OrderStep::Shipment => Self::Succeeded,
        }
    }
}

/// What happened when an order was placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderReport {
    /// The terminal state.
    pub state: OrderState,
    /// Every line the coordinator and subsystems produced, in order.
    pub transcript: Vec<String>,
}

impl OrderReport {
    /// Returns `true` if every step passed.
    pub const fn is_success(&self) -> bool {
        matches!(self.state, OrderState::Succeeded)
    }

    /// The step that failed, if any.
    pub const fn failed_step(&self) -> Option<OrderStep> {
        match self.state {
            OrderState::Failed(step) => Some(step),
            _ => None,
        }
    }
}

impl fmt::Display for OrderReport {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.transcript.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ok() -> Outcome {
        Outcome::succeeded("ok")
    }

    fn no() -> Outcome {
        Outcome::failed("no")
    }

    #[rstest]
    #[case(OrderState::Checking, OrderState::Paying)]
    #[case(OrderState::Paying, OrderState::Shipping)]
    #[case(OrderState::Shipping, OrderState::Succeeded)]
    #[case(OrderState::Succeeded, OrderState::Succeeded)]
    fn test_success_moves_forward(#[case] from: OrderState, #[case] to: OrderState) {
        assert_eq!(from.advance(&ok()), to);
    }

    #[rstest]
    #[case(OrderState::Checking, OrderStep::StockCheck)]
    #[case(OrderState::Paying, OrderStep::Payment)]
    #[case(OrderState::Shipping, OrderStep::Shipment)]
    fn test_failure_records_step(#[case] from: OrderState, #[case] step: OrderStep) {
        assert_eq!(from.advance(&no()), OrderState::Failed(step));
    }

    #[rstest]
    fn test_failed_is_terminal() {
        let failed = OrderState::Failed(OrderStep::Payment);
        assert_eq!(failed.advance(&ok()), failed);
        assert!(failed.is_terminal());
    }

    #[rstest]
    fn test_report_accessors() {
        let report = OrderReport {
            state: OrderState::Failed(OrderStep::StockCheck),
            transcript: vec!["a".to_string(), "b".to_string()],
        };
        assert!(!report.is_success());
        assert_eq!(report.failed_step(), Some(OrderStep::StockCheck));
        assert_eq!(report.to_string(), "a\nb");
    }
}
