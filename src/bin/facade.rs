//! Order facade demo.
//!
//! `STORE_STOCK_LIMIT` and `STORE_ACCEPTED_CARD` override the simulated
//! subsystems.

use structural_patterns::Result;
use structural_patterns::config::StoreConfig;
use structural_patterns::facade::{OrderFacade, OrderRequest};
use structural_patterns::logging::{DEFAULT_FILTER, init_tracing};

fn main() -> Result<()> {
    init_tracing(DEFAULT_FILTER)?;

    let config = StoreConfig::from_env()?;
    let facade = OrderFacade::from_config(&config);

    println!("Attempting a valid order...");
    let valid = OrderRequest::new("shampoo", 2, "1", 50.0, "21, masr elgdeda, Egypt")?;
    println!("{}", facade.place_order(&valid));

    println!();
    println!("Attempting an order with a invalid card...");
    let invalid = OrderRequest::new("sokar", 1, "2", 150.0, "456 Oak Ave, Othertown, USA")?;
    println!("{}", facade.place_order(&invalid));

    Ok(())
}
