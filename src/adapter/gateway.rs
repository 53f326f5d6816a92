//! Adapters as trait implementations.
//!
//! [`PaymentGateway`] is the target interface with both a `pay` and a
//! `refund` call. The adapter structs own the identifiers each provider
//! needs and translate both calls into provider-specific ones.

use tracing::debug;

use super::functional::{PAYPAL_ADAPTER_NOTE, PaymentOperation, STRIPE_ADAPTER_NOTE};
use super::receipt::PaymentReceipt;
use super::services::{PayPalApi, StripeApi};
use crate::compose::boxed;
use crate::money::Dollars;

/// The single payment interface the application talks to.
pub trait PaymentGateway {
    /// Charges the customer.
    fn pay(&self, amount: Dollars) -> PaymentReceipt;

    /// Returns money to the customer.
    fn refund(&self, amount: Dollars) -> PaymentReceipt;
}

/// Translates [`PaymentGateway`] calls into Stripe calls, converting dollars
/// to cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripeAdapter {
    api: StripeApi,
    card_details: String,
    transaction_id: String,
}

impl StripeAdapter {
    /// Creates an adapter charging `card_details` and refunding against
    /// `transaction_id`.
    #[must_use]
    pub fn new(card_details: impl Into<String>, transaction_id: impl Into<String>) -> Self {
        Self {
            api: StripeApi,
            card_details: card_details.into(),
            transaction_id: transaction_id.into(),
        }
    }
}

impl PaymentGateway for StripeAdapter {
    fn pay(&self, amount: Dollars) -> PaymentReceipt {
        debug!(%amount, "stripe gateway pay");
        self.api
            .charge(&self.card_details, amount.to_cents())
            .with_note(STRIPE_ADAPTER_NOTE)
    }

    fn refund(&self, amount: Dollars) -> PaymentReceipt {
        debug!(%amount, "stripe gateway refund");
        self.api
            .issue_refund(&self.transaction_id, amount.to_cents())
            .with_note("StripeAdapter: Converting amount to cents and calling Stripe API for refund.")
    }
}

/// Translates [`PaymentGateway`] calls into PayPal calls. No unit
/// conversion is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayPalAdapter {
    api: PayPalApi,
    email: String,
    payment_id: String,
}

impl PayPalAdapter {
    /// Creates an adapter paying `email` and reversing `payment_id`.
    #[must_use]
    pub fn new(email: impl Into<String>, payment_id: impl Into<String>) -> Self {
        Self {
            api: PayPalApi,
            email: email.into(),
            payment_id: payment_id.into(),
        }
    }
}

impl PaymentGateway for PayPalAdapter {
    fn pay(&self, amount: Dollars) -> PaymentReceipt {
        debug!(%amount, "paypal gateway pay");
        self.api
            .send_payment(&self.email, amount.amount())
            .with_note(PAYPAL_ADAPTER_NOTE)
    }

    fn refund(&self, amount: Dollars) -> PaymentReceipt {
        debug!(%amount, "paypal gateway refund");
        self.api
            .reverse_payment(&self.payment_id, amount.amount())
            .with_note("PayPalAdapter: Calling PayPal API for refund.")
    }
}

impl<Gateway: PaymentGateway + ?Sized> PaymentGateway for Box<Gateway> {
    fn pay(&self, amount: Dollars) -> PaymentReceipt {
        (**self).pay(amount)
    }

    fn refund(&self, amount: Dollars) -> PaymentReceipt {
        (**self).refund(amount)
    }
}

/// Turns a gateway's `pay` into a [`PaymentOperation`].
///
/// The gateway is moved into the operation, so trait-based and closure-based
/// adapters can be used interchangeably by the same client.
#[must_use]
pub fn pay_operation<Gateway>(gateway: Gateway) -> PaymentOperation
where
    Gateway: PaymentGateway + Send + Sync + 'static,
{
    boxed(move |amount| gateway.pay(amount))
}

/// Turns a gateway's `refund` into a [`PaymentOperation`].
#[must_use]
pub fn refund_operation<Gateway>(gateway: Gateway) -> PaymentOperation
where
    Gateway: PaymentGateway + Send + Sync + 'static,
{
    boxed(move |amount| gateway.refund(amount))
}
