//! Payment adapters demo.
//!
//! ```bash
//! RUST_LOG=structural_patterns=info cargo run --bin adapter
//! ```

use structural_patterns::Result;
use structural_patterns::adapter::{
    PayPalAccount, PayPalAdapter, PaymentGateway, StripeAdapter, StripeCard,
    create_paypal_adapter, create_stripe_adapter, process_order, process_order_with,
};
use structural_patterns::logging::{DEFAULT_FILTER, init_tracing};
use structural_patterns::money::Dollars;

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

fn main() -> Result<()> {
    init_tracing(DEFAULT_FILTER)?;

    let stripe_total = Dollars::try_from(150.75)?;
    let paypal_total = Dollars::try_from(89.99)?;

    println!("=== Adapters as functions ===");
    let stripe_gateway = create_stripe_adapter(StripeCard::new("1234-5678-9012-3456"));
    let paypal_gateway = create_paypal_adapter(PayPalAccount::new("customer@example.com"));
    print_lines(&process_order(&stripe_gateway, stripe_total).lines);
    print_lines(&process_order(&paypal_gateway, paypal_total).lines);

    println!();
    println!("=== Adapters as gateway objects ===");
    let stripe_adapter = StripeAdapter::new("1234-5678-9012-3456", "txn_stripe123");
    let paypal_adapter = PayPalAdapter::new("customer@example.com", "pay_paypal456");
    print_lines(&process_order_with(&stripe_adapter, stripe_total).lines);
    print_lines(&process_order_with(&paypal_adapter, paypal_total).lines);

    println!();
    println!("--- Issuing a refund ---");
    print_lines(&stripe_adapter.refund(Dollars::try_from(25.0)?).transcript);

    Ok(())
}
