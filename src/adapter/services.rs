//! Simulated third-party payment services.
//!
//! These are the adaptees: their call shapes are fixed and differ from the
//! application's. Each call logs one `tracing` event and returns a receipt
//! instead of talking to a real backend.

use rust_decimal::Decimal;
use tracing::info;

use super::receipt::{PaymentAction, PaymentReceipt, Provider, ProviderAmount};

/// Stripe-like card processor. Amounts are in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StripeApi;

impl StripeApi {
    /// Charges a card.
    pub fn charge(&self, card_details: &str, amount_cents: i64) -> PaymentReceipt {
        let amount = ProviderAmount::Cents(amount_cents);
        info!(provider = "stripe", card = card_details, amount_cents, "charge");
        PaymentReceipt::new(
            Provider::Stripe,
            PaymentAction::Charge,
            card_details,
            amount,
            format!("Stripe: Charging card '{card_details}' for {amount}."),
        )
    }

    /// Refunds a previous transaction.
    pub fn issue_refund(&self, transaction_id: &str, amount_cents: i64) -> PaymentReceipt {
        let amount = ProviderAmount::Cents(amount_cents);
        info!(provider = "stripe", transaction_id, amount_cents, "refund");
        PaymentReceipt::new(
            Provider::Stripe,
            PaymentAction::Refund,
            transaction_id,
            amount,
            format!("Stripe: Refunding {amount} for transaction '{transaction_id}'."),
        )
    }
}

/// PayPal-like email payment service. Amounts are in dollars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PayPalApi;

impl PayPalApi {
    /// Sends a payment to an email address.
    pub fn send_payment(&self, email: &str, amount_dollars: Decimal) -> PaymentReceipt {
        let amount = ProviderAmount::Dollars(amount_dollars);
        info!(provider = "paypal", email, amount = %amount_dollars, "send payment");
        PaymentReceipt::new(
            Provider::PayPal,
            PaymentAction::Charge,
            email,
            amount,
            format!("PayPal: Sending payment of {amount} to '{email}'."),
        )
    }

    /// Reverses a previous payment.
    pub fn reverse_payment(&self, payment_id: &str, amount_dollars: Decimal) -> PaymentReceipt {
        let amount = ProviderAmount::Dollars(amount_dollars);
        info!(provider = "paypal", payment_id, amount = %amount_dollars, "reverse payment");
        PaymentReceipt::new(
            Provider::PayPal,
            PaymentAction::Refund,
            payment_id,
            amount,
            format!("PayPal: Reversing payment of {amount} for payment ID '{payment_id}'."),
        )
    }
}
