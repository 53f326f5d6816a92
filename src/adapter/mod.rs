//! Payment adapters.
//!
//! Two simulated payment providers expose incompatible call shapes:
//!
//! - Stripe charges a card in **cents**: `charge(card_details, amount_cents)`
//! - PayPal pays an email address in **dollars**: `send_payment(email, amount)`
//!
//! The application only wants one shape, `(Dollars) -> PaymentReceipt`. This
//! module bridges the two providers to that shape in three ways:
//!
//! - [`create_stripe_adapter`] / [`create_paypal_adapter`]: higher-order
//!   functions that capture the provider parameters and return a
//!   [`PaymentOperation`]
//! - [`PaymentGateway`]: a trait with `pay` and `refund`, implemented by
//!   [`StripeAdapter`] and [`PayPalAdapter`]
//! - [`process_order_by_provider`]: the tightly coupled client the adapters
//!   replace, which branches on a provider tag
//!
//! # Examples
//!
//! ```rust
//! use structural_patterns::adapter::{
//!     create_paypal_adapter, create_stripe_adapter, process_order, PayPalAccount, StripeCard,
//! };
//! use structural_patterns::money::Dollars;
//!
//! let gateways = [
//!     create_stripe_adapter(StripeCard::new("1234-5678-9012-3456")),
//!     create_paypal_adapter(PayPalAccount::new("customer@example.com")),
//! ];
//!
//! for gateway in &gateways {
//!     let summary = process_order(gateway, Dollars::try_from(89.99).unwrap());
//!     assert!(summary.is_success());
//! }
//! ```

mod client;
mod coupled;
mod functional;
mod gateway;
mod receipt;
mod services;

pub use client::{OrderSummary, process_order, process_order_with};
pub use coupled::{UserDetails, process_order_by_provider};
pub use functional::{
    PayPalAccount, PaymentOperation, StripeCard, create_paypal_adapter, create_stripe_adapter,
};
pub use gateway::{PayPalAdapter, PaymentGateway, StripeAdapter, pay_operation, refund_operation};
pub use receipt::{PaymentAction, PaymentReceipt, Provider, ProviderAmount};
pub use services::{PayPalApi, StripeApi};
