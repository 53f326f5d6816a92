//! The client the adapters replace.
//!
//! [`process_order_by_provider`] knows every provider's call shape and
//! branches on a string tag. Supporting a new provider means editing this
//! function.

use tracing::{error, warn};

use super::client::{OrderSummary, SUCCESS_LINE, opening_line};
use super::services::{PayPalApi, StripeApi};
use crate::money::Dollars;
use crate::outcome::Outcome;

/// Per-provider details the coupled client looks up by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDetails {
    /// Card used for Stripe payments.
    pub card: Option<String>,
    /// Email used for PayPal payments.
    pub email: Option<String>,
}

impl UserDetails {
    /// Details for a Stripe customer.
    #[must_use]
    pub fn with_card(card: impl Into<String>) -> Self {
        Self {
            card: Some(card.into()),
            email: None,
        }
    }

    /// Details for a PayPal customer.
    #[must_use]
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            card: None,
            email: Some(email.into()),
        }
    }
}

/// Processes an order by branching on `provider`.
///
/// Recognised tags are `"stripe"` and `"paypal"`. An unknown tag, or a
/// known tag whose detail is missing, returns a failed summary without
/// calling any provider.
///
/// # Examples
///
/// ```rust
/// use structural_patterns::adapter::{process_order_by_provider, UserDetails};
/// use structural_patterns::money::Dollars;
///
/// let summary = process_order_by_provider(
///     "square",
///     Dollars::try_from(49.95).unwrap(),
///     &UserDetails::default(),
/// );
///
/// assert!(!summary.is_success());
/// assert!(summary.receipt.is_none());
/// ```
pub fn process_order_by_provider(
    provider: &str,
    amount: Dollars,
    details: &UserDetails,
) -> OrderSummary {
    let mut lines = vec![opening_line(amount)];

    let receipt = match (provider, &details.card, &details.email) {
        ("stripe", Some(card), _) => {
            lines.push("Client: Converting amount to cents for Stripe.".to_string());
            let amount_in_cents = amount.to_cents();
            StripeApi.charge(card, amount_in_cents)
        }
        ("paypal", _, Some(email)) => {
            lines.push("Client: Calling PayPal directly.".to_string());
            PayPalApi.send_payment(email, amount.amount())
        }
        ("stripe" | "paypal", _, _) => {
            let message = format!("Missing payment details for provider '{provider}'.");
            warn!(provider, "missing payment details");
            return failed_summary(amount, lines, message);
        }
        _ => {
            let message = format!("Unknown payment provider '{provider}'.");
            error!(provider, "unknown payment provider");
            return failed_summary(amount, lines, message);
        }
    };

    lines.extend(receipt.transcript.iter().cloned());
    lines.push(SUCCESS_LINE.to_string());
    OrderSummary {
        total: amount,
        outcome: Outcome::succeeded(format!("Paid {amount} via {}.", receipt.provider)),
        receipt: Some(receipt),
        lines,
    }
}

fn failed_summary(total: Dollars, mut lines: Vec<String>, message: String) -> OrderSummary {
    lines.push(format!("Error: {message}"));
    OrderSummary {
        total,
        outcome: Outcome::failed(message),
        receipt: None,
        lines,
    }
}
