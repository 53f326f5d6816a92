//! The facade: one call that runs stock check, payment and shipment.

use tracing::{info, warn};

use super::request::OrderRequest;
use super::state::{OrderReport, OrderState};
use super::subsystems::{
    Inventory, Payments, Shipping, SimulatedInventory, SimulatedPayments, SimulatedShipping,
};
use crate::config::StoreConfig;
use crate::money::Dollars;
use crate::outcome::Outcome;

const START_LINE: &str = "--- Initiating order process ---";
const SUCCESS_LINE: &str = "--- Order process completed successfully! ---";

/// Accumulates state and transcript while an order runs.
struct OrderRun<'a> {
    request: &'a OrderRequest,
    state: OrderState,
    transcript: Vec<String>,
}

impl<'a> OrderRun<'a> {
    fn start(request: &'a OrderRequest) -> Self {
        info!(product_id = request.product_id(), "order started");
        Self {
            request,
            state: OrderState::Checking,
            transcript: vec![START_LINE.to_string()],
        }
    }

    /// Runs `call` for the current step. Does nothing once the run is terminal.
    fn step<F>(mut self, call: F) -> Self
    where
        F: FnOnce(&OrderRequest) -> Outcome,
    {
        let Some(step) = self.state.current_step() else {
            return self;
        };
        self.transcript.push(step.announcement(self.request));
        let outcome = call(self.request);
        self.transcript.push(outcome.message.clone());
        self.state = self.state.advance(&outcome);
        self
    }

    fn finish(mut self) -> OrderReport {
        debug_assert!(self.state.is_terminal());
        match self.state {
            OrderState::Failed(step) => {
                warn!(%step, "order failed");
                self.transcript.push(format!(
                    "--- Order process failed ({}) ---",
                    step.failure_reason()
                ));
            }
            _ => {
                info!("order completed");
                self.transcript.push(SUCCESS_LINE.to_string());
            }
        }
        OrderReport {
            state: self.state,
            transcript: self.transcript,
        }
    }
}

/// Places an order by calling three subsystem functions in order.
///
/// Stops at the first failed step; later functions are never called. Nothing
/// is undone when a late step fails after an earlier one succeeded.
///
/// # Examples
///
/// ```rust
/// use structural_patterns::facade::{place_order, OrderRequest};
/// use structural_patterns::outcome::Outcome;
///
/// let request = OrderRequest::new("sokar", 1, "2", 150.0, "456 Oak Ave, Othertown, USA")?;
/// let report = place_order(
///     &request,
///     |_, _| Outcome::succeeded("Stock is available."),
///     |_, _| Outcome::failed("Payment failed (invalid card)."),
///     |_, _| panic!("shipment must not run"),
/// );
///
/// assert!(!report.is_success());
/// # Ok::<(), structural_patterns::money::AmountError>(())
/// ```
pub fn place_order<C, P, S>(
    request: &OrderRequest,
    check_stock: C,
    process_payment: P,
    create_shipment: S,
) -> OrderReport
where
    C: FnOnce(&str, u32) -> Outcome,
    P: FnOnce(&str, Dollars) -> Outcome,
    S: FnOnce(&str, &str) -> Outcome,
{
    OrderRun::start(request)
        .step(|order| check_stock(order.product_id(), order.quantity()))
        .step(|order| process_payment(order.credit_card(), order.total()))
        .step(|order| create_shipment(order.product_id(), order.address()))
        .finish()
}

/// Owns the three subsystems and hides their sequencing.
///
/// # Examples
///
/// ```rust
/// use structural_patterns::facade::{OrderFacade, OrderRequest};
///
/// let facade = OrderFacade::default();
/// let request = OrderRequest::new("shampoo", 2, "1", 50.0, "21, masr elgdeda, Egypt")?;
///
/// assert!(facade.place_order(&request).is_success());
/// # Ok::<(), structural_patterns::money::AmountError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFacade<I, P, S> {
    inventory: I,
    payments: P,
    shipping: S,
}

impl<I, P, S> OrderFacade<I, P, S>
where
    I: Inventory,
    P: Payments,
    S: Shipping,
{
    /// Creates a facade over the given subsystems.
    pub const fn new(inventory: I, payments: P, shipping: S) -> Self {
        Self {
            inventory,
            payments,
            shipping,
        }
    }

    /// Places an order. See [`place_order`] for the sequencing rules.
    pub fn place_order(&self, request: &OrderRequest) -> OrderReport {
        place_order(
            request,
            |product_id, quantity| self.inventory.check_stock(product_id, quantity),
            |credit_card, amount| self.payments.process_payment(credit_card, amount),
            |product_id, address| self.shipping.create_shipment(product_id, address),
        )
    }
}

impl OrderFacade<SimulatedInventory, SimulatedPayments, SimulatedShipping> {
    /// Creates a facade over simulated subsystems configured by `config`.
    #[must_use]
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(
            SimulatedInventory::new(config.stock_limit),
            SimulatedPayments::new(config.accepted_card.clone()),
            SimulatedShipping,
        )
    }
}

impl Default for OrderFacade<SimulatedInventory, SimulatedPayments, SimulatedShipping> {
    fn default() -> Self {
        Self::from_config(&StoreConfig::default())
    }
}
