//! Adapters as higher-order functions.
//!
//! Each factory takes the provider-specific parameters as a small owned
//! struct and returns a [`PaymentOperation`] that moves those parameters in.

use rust_decimal::Decimal;
use tracing::debug;

use super::receipt::PaymentReceipt;
use super::services::{PayPalApi, StripeApi};
use crate::compose::{BoxedOperation, adapt, boxed};
use crate::money::Dollars;

/// The application's payment shape: charge an amount in dollars.
pub type PaymentOperation = BoxedOperation<Dollars, PaymentReceipt>;

/// Console line written by the Stripe adapter before delegating.
pub(crate) const STRIPE_ADAPTER_NOTE: &str =
    "StripeAdapter: Converting amount to cents and calling Stripe API.";

/// Console line written by the PayPal adapter before delegating.
pub(crate) const PAYPAL_ADAPTER_NOTE: &str = "PayPalAdapter: Calling PayPal API directly.";

/// The card a Stripe adapter charges.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StripeCard {
    /// Card number or token.
    pub card_details: String,
}

impl StripeCard {
    /// Creates a card descriptor.
    #[must_use]
    pub fn new(card_details: impl Into<String>) -> Self {
        Self {
            card_details: card_details.into(),
        }
    }
}

/// The account a PayPal adapter pays.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PayPalAccount {
    /// Recipient email address.
    pub email: String,
}

impl PayPalAccount {
    /// Creates an account descriptor.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Adapts Stripe's `charge(card, cents)` to the dollar payment shape.
///
/// Each invocation converts the amount to `round(amount * 100)` cents and
/// makes exactly one Stripe call.
///
/// # Examples
///
/// ```rust
/// use structural_patterns::adapter::{create_stripe_adapter, ProviderAmount, StripeCard};
/// use structural_patterns::money::Dollars;
///
/// let pay = create_stripe_adapter(StripeCard::new("1234-5678-9012-3456"));
/// let receipt = pay(Dollars::try_from(150.75).unwrap());
///
/// assert_eq!(receipt.amount, ProviderAmount::Cents(15_075));
/// ```
#[must_use]
pub fn create_stripe_adapter(card: StripeCard) -> PaymentOperation {
    let charge_in_cents = adapt(
        move |amount_cents: i64| StripeApi.charge(&card.card_details, amount_cents),
        |amount: Dollars| amount.to_cents(),
    );
    boxed(move |amount: Dollars| {
        debug!(%amount, "stripe adapter invoked");
        charge_in_cents(amount).with_note(STRIPE_ADAPTER_NOTE)
    })
}

/// Adapts PayPal's `send_payment(email, dollars)` to the dollar payment shape.
///
/// No unit conversion is needed; each invocation makes exactly one PayPal
/// call with the amount unchanged.
#[must_use]
pub fn create_paypal_adapter(account: PayPalAccount) -> PaymentOperation {
    let send_payment = adapt(
        move |amount_dollars: Decimal| PayPalApi.send_payment(&account.email, amount_dollars),
        |amount: Dollars| amount.amount(),
    );
    boxed(move |amount: Dollars| {
        debug!(%amount, "paypal adapter invoked");
        send_payment(amount).with_note(PAYPAL_ADAPTER_NOTE)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{Provider, ProviderAmount};

    #[test]
    fn test_stripe_adapter_transcript_order() {
        let pay = create_stripe_adapter(StripeCard::new("4242"));
        let receipt = pay(Dollars::from_cents(1_000).unwrap());

        assert_eq!(receipt.provider, Provider::Stripe);
        assert_eq!(
            receipt.transcript,
            vec![
                STRIPE_ADAPTER_NOTE.to_string(),
                "Stripe: Charging card '4242' for $10.00.".to_string(),
            ]
        );
    }

    #[test]
    fn test_paypal_adapter_passes_dollars_through() {
        let pay = create_paypal_adapter(PayPalAccount::new("a@b.c"));
        let receipt = pay(Dollars::from_cents(8_999).unwrap());

        assert_eq!(receipt.amount, ProviderAmount::Dollars(Decimal::new(8_999, 2)));
        assert_eq!(receipt.reference, "a@b.c");
    }
}
