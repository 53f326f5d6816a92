#![cfg(feature = "facade")]
//! Integration tests for the order facade.

use std::cell::Cell;

use rstest::rstest;
use structural_patterns::config::StoreConfig;
use structural_patterns::facade::{
    Inventory, OrderFacade, OrderRequest, OrderState, OrderStep, Payments, Shipping,
    SimulatedInventory, SimulatedPayments, SimulatedShipping, place_order,
};
use structural_patterns::money::Dollars;
use structural_patterns::outcome::Outcome;

fn request(quantity: u32, credit_card: &str, price: f64) -> OrderRequest {
    OrderRequest::new("shampoo", quantity, credit_card, price, "21, masr elgdeda, Egypt").unwrap()
}

#[rstest]
fn test_invalid_card_never_ships() {
    let shipments = Cell::new(0);
    let facade = OrderFacade::new(
        SimulatedInventory::default(),
        SimulatedPayments::default(),
        |_: &str, _: &str| {
            shipments.set(shipments.get() + 1);
            Outcome::succeeded("Shipment created !.")
        },
    );

    let report = facade.place_order(&request(1, "2", 150.0));

    assert!(!report.is_success());
    assert_eq!(report.state, OrderState::Failed(OrderStep::Payment));
    assert_eq!(shipments.get(), 0);
    assert_eq!(
        report.transcript.last().map(String::as_str),
        Some("--- Order process failed (Payment Error) ---")
    );
}

#[rstest]
fn test_valid_order_succeeds() {
    let report = OrderFacade::default().place_order(&request(2, "1", 50.0));

    assert!(report.is_success());
    assert_eq!(report.failed_step(), None);
    assert!(report.transcript.contains(&"Processing payment of $100.00...".to_string()));
}

#[rstest]
fn test_stock_failure_skips_payment_and_shipment() {
    let payments = Cell::new(0);
    let shipments = Cell::new(0);

    let report = place_order(
        &request(150, "1", 1.0),
        |_, quantity| {
            if quantity < 100 {
                Outcome::succeeded("Stock is available.")
            } else {
                Outcome::failed("Stock is NOT available.")
            }
        },
        |_, _| {
            payments.set(payments.get() + 1);
            Outcome::succeeded("Payment successful !")
        },
        |_, _| {
            shipments.set(shipments.get() + 1);
            Outcome::succeeded("Shipment created !.")
        },
    );

    assert_eq!(report.failed_step(), Some(OrderStep::StockCheck));
    assert_eq!((payments.get(), shipments.get()), (0, 0));
}

#[rstest]
fn test_payment_receives_price_times_quantity() {
    let charged = Cell::new(Dollars::ZERO);

    let report = place_order(
        &request(3, "1", 19.99),
        |_, _| Outcome::succeeded("Stock is available."),
        |_, amount| {
            charged.set(amount);
            Outcome::succeeded("Payment successful !")
        },
        |_, _| Outcome::succeeded("Shipment created !."),
    );

    assert!(report.is_success());
    assert_eq!(charged.get().to_cents(), 5_997);
}

#[rstest]
fn test_shipment_failure_keeps_payment() {
    let report = place_order(
        &request(1, "1", 10.0),
        |_, _| Outcome::succeeded("Stock is available."),
        |_, _| Outcome::succeeded("Payment successful !"),
        |_, _| Outcome::failed("No courier available."),
    );

    assert_eq!(report.state, OrderState::Failed(OrderStep::Shipment));
    assert!(report.transcript.iter().any(|line| line == "Payment successful !"));
    assert_eq!(
        report.transcript.last().map(String::as_str),
        Some("--- Order process failed (Shipping Error) ---")
    );
}

#[rstest]
#[case(2, "1", true)]
#[case(99, "1", true)]
#[case(100, "1", false)]
#[case(1, "2", false)]
fn test_facade_and_function_agree(#[case] quantity: u32, #[case] card: &str, #[case] succeeds: bool) {
    let order = request(quantity, card, 50.0);
    let inventory = SimulatedInventory::default();
    let payments = SimulatedPayments::default();

    let by_facade = OrderFacade::default().place_order(&order);
    let by_function = place_order(
        &order,
        |product_id, quantity| inventory.check_stock(product_id, quantity),
        |credit_card, amount| payments.process_payment(credit_card, amount),
        |product_id, address| SimulatedShipping.create_shipment(product_id, address),
    );

    assert_eq!(by_facade, by_function);
    assert_eq!(by_facade.is_success(), succeeds);
}

#[rstest]
fn test_configured_card_is_the_only_accepted_one() {
    let facade = OrderFacade::from_config(&StoreConfig {
        stock_limit: 100,
        accepted_card: "4242".to_string(),
    });

    assert!(!facade.place_order(&request(1, "1", 5.0)).is_success());
    assert!(facade.place_order(&request(1, "4242", 5.0)).is_success());
}

#[rstest]
fn test_report_serializes_state_and_transcript() {
    let report = OrderFacade::default().place_order(&request(1, "2", 150.0));
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["state"], serde_json::json!({ "Failed": "Payment" }));
    assert_eq!(json["transcript"][0], "--- Initiating order process ---");
}
