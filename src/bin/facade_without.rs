//! Orders without a facade: the client sequences every subsystem itself,
//! and repeats that logic for each order.

use structural_patterns::Result;
use structural_patterns::facade::{
    Inventory, OrderRequest, OrderStep, Payments, Shipping, SimulatedInventory, SimulatedPayments,
    SimulatedShipping,
};
use structural_patterns::logging::{DEFAULT_FILTER, init_tracing};

fn main() -> Result<()> {
    init_tracing(DEFAULT_FILTER)?;

    let inventory = SimulatedInventory::default();
    let payments = SimulatedPayments::default();
    let shipping = SimulatedShipping;

    println!("Attempting a valid order...");
    let first = OrderRequest::new("shampoo", 2, "1", 50.0, "21, masr elgdeda, Egypt")?;
    println!("--- Initiating order process ---");
    println!("{}", OrderStep::StockCheck.announcement(&first));
    let stock = inventory.check_stock(first.product_id(), first.quantity());
    println!("{stock}");
    if stock.is_success() {
        println!("{}", OrderStep::Payment.announcement(&first));
        let payment = payments.process_payment(first.credit_card(), first.total());
        println!("{payment}");
        if payment.is_success() {
            println!("{}", OrderStep::Shipment.announcement(&first));
            println!("{}", shipping.create_shipment(first.product_id(), first.address()));
            println!("--- Order process completed successfully! ---");
        } else {
            println!("--- Order process failed (Payment Error) ---");
        }
    } else {
        println!("--- Order process failed (Out of Stock) ---");
    }

    println!();
    println!("Attempting an order with a invalid card...");
    let second = OrderRequest::new("sokar", 1, "2", 150.0, "456 Oak Ave, Othertown, USA")?;
    println!("--- Initiating order process ---");
    println!("{}", OrderStep::StockCheck.announcement(&second));
    let stock = inventory.check_stock(second.product_id(), second.quantity());
    println!("{stock}");
    if stock.is_success() {
        println!("{}", OrderStep::Payment.announcement(&second));
        let payment = payments.process_payment(second.credit_card(), second.total());
        println!("{payment}");
        if payment.is_success() {
            println!("{}", OrderStep::Shipment.announcement(&second));
            println!("{}", shipping.create_shipment(second.product_id(), second.address()));
            println!("--- Order process completed successfully! ---");
        } else {
            println!("--- Order process failed (Payment Error) ---");
        }
    } else {
        println!("--- Order process failed (Out of Stock) ---");
    }

    Ok(())
}
