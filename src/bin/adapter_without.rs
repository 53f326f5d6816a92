//! Payments without adapters: the client branches on a provider tag.

use structural_patterns::Result;
use structural_patterns::adapter::{UserDetails, process_order_by_provider};
use structural_patterns::logging::{DEFAULT_FILTER, init_tracing};
use structural_patterns::money::Dollars;

fn main() -> Result<()> {
    init_tracing(DEFAULT_FILTER)?;

    let orders = [
        ("stripe", 150.75, UserDetails::with_card("1234-5678-9012-3456")),
        ("paypal", 89.99, UserDetails::with_email("customer@example.com")),
        ("square", 49.95, UserDetails::default()),
    ];

    for (provider, amount, details) in orders {
        let summary = process_order_by_provider(provider, Dollars::try_from(amount)?, &details);
        for line in &summary.lines {
            println!("{line}");
        }
    }

    Ok(())
}
