//! Order requests.

use serde::Serialize;

use crate::money::{AmountError, Dollars};

/// Everything needed to place one order.
///
/// The total charged is `price * quantity`, computed and validated when the
/// request is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    product_id: String,
    quantity: u32,
    #[serde(skip_serializing)]
    credit_card: String,
    price: Dollars,
    total: Dollars,
    address: String,
}

impl OrderRequest {
    /// Builds a request.
    ///
    /// # Errors
    ///
    /// Returns an [`AmountError`] if `price` is not a finite non-negative
    /// amount or the total does not fit in whole cents.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use structural_patterns::facade::OrderRequest;
    ///
    /// let request = OrderRequest::new("shampoo", 2, "1", 50.0, "21, masr elgdeda, Egypt")?;
    /// assert_eq!(request.total().to_string(), "$100.00");
    /// # Ok::<(), structural_patterns::money::AmountError>(())
    /// ```
    pub fn new(
        product_id: impl Into<String>,
        quantity: u32,
        credit_card: impl Into<String>,
        price: f64,
        address: impl Into<String>,
    ) -> Result<Self, AmountError> {
        let price = Dollars::try_from(price)?;
        let total = price.times(quantity)?;
        Ok(Self {
            product_id: product_id.into(),
            quantity,
            credit_card: credit_card.into(),
            price,
            total,
            address: address.into(),
        })
    }

    /// The product being ordered.
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Number of units.
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Card to charge.
    pub fn credit_card(&self) -> &str {
        &self.credit_card
    }

    /// Price of one unit.
    pub const fn price(&self) -> Dollars {
        self.price
    }

    /// Amount charged for the whole order.
    pub const fn total(&self) -> Dollars {
        self.total
    }

    /// Shipping address.
    pub fn address(&self) -> &str {
        &self.address
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(50.0, 2, 10_000)]
    #[case(150.0, 1, 15_000)]
    #[case(0.1, 3, 30)]
    #[case(9.99, 0, 0)]
    fn test_total_is_price_times_quantity(
        #[case] price: f64,
        #[case] quantity: u32,
        #[case] cents: i64,
    ) {
        let request = OrderRequest::new("p", quantity, "1", price, "a").unwrap();
        assert_eq!(request.total().to_cents(), cents);
    }

    #[rstest]
    fn test_negative_price_is_rejected() {
        let error = OrderRequest::new("p", 1, "1", -5.0, "a").unwrap_err();
        assert!(matches!(error, AmountError::Negative(_)));
    }

    #[rstest]
    fn test_card_is_not_serialized() {
        let request = OrderRequest::new("sokar", 1, "2", 150.0, "456 Oak Ave").unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("credit_card").is_none());
        assert_eq!(json["product_id"], "sokar");
    }

    #[rstest]
    fn test_total_serializes_as_decimal() {
        let request = OrderRequest::new("shampoo", 2, "1", 50.0, "21, masr elgdeda, Egypt").unwrap();
        let json = serde_json::to_value(&request).unwrap();
        let total: rust_decimal::Decimal = json["total"].as_str().unwrap().parse().unwrap();

        assert_eq!(total, rust_decimal::Decimal::from(100));
    }
}
