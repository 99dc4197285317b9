//! Order validation and authoritative pricing.
//!
//! Every amount sent to a payment gateway is computed here from catalog
//! prices. Client-submitted prices are never read: item parsing only looks
//! at `productId` and `quantity`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::catalog::Catalog;

use super::errors::InvalidOrderError;
use super::money::format_cents;

/// Smallest quantity accepted for a single line.
pub const MIN_QUANTITY: i64 = 1;

/// Largest quantity accepted for a single line.
pub const MAX_QUANTITY: i64 = 20;

/// A well-formed but not yet validated cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutItemRequest {
    pub product_id: String,
    pub quantity: i64,
}

impl CheckoutItemRequest {
    pub fn new(product_id: impl Into<String>, quantity: i64) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// A priced order line. `unit_price_cents` always comes from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub line_total_cents: i64,
}

/// Order priced from the catalog. Only the validator constructs these, so
/// `amount_cents() > 0` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedOrder {
    amount_cents: i64,
    line_items: Vec<LineItem>,
}

impl ValidatedOrder {
    pub fn amount_cents(&self) -> i64 {
        self.amount_cents
    }

    /// Amount as a two-decimal string, the form gateways expect.
    pub fn amount_decimal(&self) -> String {
        format_cents(self.amount_cents)
    }

    /// Lines in submission order. Duplicate product ids stay separate.
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }
}

/// Validates untrusted cart contents against the catalog.
#[derive(Debug, Clone)]
pub struct OrderValidator {
    catalog: Arc<Catalog>,
}

impl OrderValidator {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Validates a raw JSON item list as submitted by a client.
    ///
    /// `items` must be a non-empty array of objects, each with a non-empty
    /// string `productId` and an integer `quantity` in
    /// [`MIN_QUANTITY`, `MAX_QUANTITY`]. Numeric strings such as `"2"` and
    /// integral floats such as `2.0` count as integers. Other fields are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, scanning items in order.
    pub fn validate(&self, items: &Value) -> Result<ValidatedOrder, InvalidOrderError> {
        let entries = match items {
            Value::Array(entries) if !entries.is_empty() => entries,
            _ => return Err(InvalidOrderError::Empty),
        };

        let mut line_items = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let request = parse_item(index, entry)?;
            line_items.push(self.price_line(index, &request)?);
        }

        finish(line_items)
    }

    /// Validates already-typed item requests.
    ///
    /// Applies the same quantity bounds and catalog checks as [`validate`](Self::validate).
    pub fn validate_items(
        &self,
        items: &[CheckoutItemRequest],
    ) -> Result<ValidatedOrder, InvalidOrderError> {
        if items.is_empty() {
            return Err(InvalidOrderError::Empty);
        }

        let line_items = items
            .iter()
            .enumerate()
            .map(|(index, request)| self.price_line(index, request))
            .collect::<Result<Vec<_>, _>>()?;

        finish(line_items)
    }

    fn price_line(
        &self,
        index: usize,
        request: &CheckoutItemRequest,
    ) -> Result<LineItem, InvalidOrderError> {
        if request.product_id.is_empty()
            || !(MIN_QUANTITY..=MAX_QUANTITY).contains(&request.quantity)
        {
            return Err(InvalidOrderError::InvalidProductOrQuantity { index });
        }

        let product = self
            .catalog
            .lookup(&request.product_id)
            .filter(|product| product.in_stock)
            .ok_or_else(|| InvalidOrderError::ProductUnavailable {
                product_id: request.product_id.clone(),
            })?;

        let line_total_cents = product
            .price_cents
            .checked_mul(request.quantity)
            .ok_or(InvalidOrderError::InvalidTotal)?;

        Ok(LineItem {
            product_id: product.id.clone(),
            quantity: request.quantity,
            unit_price_cents: product.price_cents,
            line_total_cents,
        })
    }
}

fn parse_item(index: usize, entry: &Value) -> Result<CheckoutItemRequest, InvalidOrderError> {
    let object = entry
        .as_object()
        .ok_or(InvalidOrderError::MalformedItem { index })?;

    let product_id = object
        .get("productId")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .ok_or(InvalidOrderError::InvalidProductOrQuantity { index })?;

    let quantity = object
        .get("quantity")
        .and_then(parse_quantity)
        .ok_or(InvalidOrderError::InvalidProductOrQuantity { index })?;

    Ok(CheckoutItemRequest::new(product_id, quantity))
}

fn parse_quantity(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .filter(|f| f.abs() <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn finish(line_items: Vec<LineItem>) -> Result<ValidatedOrder, InvalidOrderError> {
    let amount_cents = line_items
        .iter()
        .try_fold(0i64, |sum, line| sum.checked_add(line.line_total_cents))
        .ok_or(InvalidOrderError::InvalidTotal)?;

    if amount_cents <= 0 {
        return Err(InvalidOrderError::InvalidTotal);
    }

    Ok(ValidatedOrder {
        amount_cents,
        line_items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Product;
    use proptest::prelude::*;
    use serde_json::json;

    fn validator() -> OrderValidator {
        OrderValidator::new(Arc::new(Catalog::seeded()))
    }

    fn validator_with(products: Vec<Product>) -> OrderValidator {
        OrderValidator::new(Arc::new(Catalog::new(products)))
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Pricing
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn prices_single_line_from_catalog() {
        let order = validator()
            .validate(&json!([{ "productId": "sm-board-001", "quantity": 2 }]))
            .unwrap();

        assert_eq!(order.amount_cents(), 79_980);
        assert_eq!(order.amount_decimal(), "799.80");
        assert_eq!(
            order.line_items(),
            &[LineItem {
                product_id: "sm-board-001".to_string(),
                quantity: 2,
                unit_price_cents: 39_990,
                line_total_cents: 79_980,
            }]
        );
    }

    #[test]
    fn ignores_client_supplied_prices() {
        let order = validator()
            .validate(&json!([
                { "productId": "sm-board-001", "quantity": 1, "priceCents": 1 },
                { "productId": "sm-pendant-001", "quantity": 1, "unitPriceCents": 0, "lineTotalCents": 0 }
            ]))
            .unwrap();

        assert_eq!(order.amount_cents(), 39_990 + 124_990);
    }

    #[test]
    fn duplicate_products_are_priced_separately() {
        let order = validator()
            .validate(&json!([
                { "productId": "sm-objet-001", "quantity": 1 },
                { "productId": "sm-objet-001", "quantity": 3 }
            ]))
            .unwrap();

        assert_eq!(order.line_items().len(), 2);
        assert_eq!(order.line_items()[0].quantity, 1);
        assert_eq!(order.line_items()[1].quantity, 3);
        assert_eq!(order.amount_cents(), 59_990 * 4);
    }

    #[test]
    fn preserves_input_order() {
        let order = validator()
            .validate(&json!([
                { "productId": "sm-pendant-001", "quantity": 1 },
                { "productId": "sm-coffee-table-001", "quantity": 1 },
                { "productId": "sm-board-001", "quantity": 1 }
            ]))
            .unwrap();

        let ids: Vec<&str> = order
            .line_items()
            .iter()
            .map(|line| line.product_id.as_str())
            .collect();
        assert_eq!(ids, vec!["sm-pendant-001", "sm-coffee-table-001", "sm-board-001"]);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Quantity bounds
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn accepts_quantity_bounds() {
        for quantity in [MIN_QUANTITY, MAX_QUANTITY] {
            let result =
                validator().validate(&json!([{ "productId": "sm-board-001", "quantity": quantity }]));
            assert!(result.is_ok(), "quantity {} should be accepted", quantity);
        }
    }

    #[test]
    fn rejects_out_of_range_and_fractional_quantities() {
        for quantity in [json!(0), json!(21), json!(1.5), json!(-1), json!(null), json!(true), json!("two")] {
            let result =
                validator().validate(&json!([{ "productId": "sm-board-001", "quantity": quantity }]));
            assert_eq!(
                result,
                Err(InvalidOrderError::InvalidProductOrQuantity { index: 0 }),
                "quantity {} should be rejected",
                quantity
            );
        }
    }

    #[test]
    fn missing_quantity_is_rejected() {
        let result = validator().validate(&json!([{ "productId": "sm-board-001" }]));
        assert_eq!(result, Err(InvalidOrderError::InvalidProductOrQuantity { index: 0 }));
    }

    #[test]
    fn coerces_numeric_strings_and_integral_floats() {
        let order = validator()
            .validate(&json!([
                { "productId": "sm-board-001", "quantity": "2" },
                { "productId": "sm-board-001", "quantity": 3.0 }
            ]))
            .unwrap();

        assert_eq!(order.line_items()[0].quantity, 2);
        assert_eq!(order.line_items()[1].quantity, 3);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Shape and availability
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn rejects_empty_or_non_array_items() {
        for items in [json!([]), json!(null), json!({}), json!("sm-board-001")] {
            assert_eq!(validator().validate(&items), Err(InvalidOrderError::Empty));
        }
    }

    #[test]
    fn rejects_non_object_entries() {
        let result = validator().validate(&json!([
            { "productId": "sm-board-001", "quantity": 1 },
            "sm-board-001"
        ]));
        assert_eq!(result, Err(InvalidOrderError::MalformedItem { index: 1 }));
    }

    #[test]
    fn rejects_missing_or_empty_product_id() {
        for entry in [json!({ "quantity": 1 }), json!({ "productId": "", "quantity": 1 })] {
            assert_eq!(
                validator().validate(&json!([entry])),
                Err(InvalidOrderError::InvalidProductOrQuantity { index: 0 })
            );
        }
    }

    #[test]
    fn rejects_unknown_product_by_name() {
        let err = validator()
            .validate(&json!([{ "productId": "sm-ghost-001", "quantity": 1 }]))
            .unwrap_err();

        assert_eq!(err.to_string(), "Product unavailable: sm-ghost-001");
    }

    #[test]
    fn rejects_out_of_stock_product_by_name() {
        let validator = validator_with(vec![
            Product::priced("in-stock", 1_000),
            Product::priced("sold-out", 1_000).out_of_stock(),
        ]);

        let err = validator
            .validate(&json!([
                { "productId": "in-stock", "quantity": 1 },
                { "productId": "sold-out", "quantity": 1 }
            ]))
            .unwrap_err();

        assert_eq!(
            err,
            InvalidOrderError::ProductUnavailable {
                product_id: "sold-out".to_string()
            }
        );
    }

    #[test]
    fn rejects_zero_total() {
        let validator = validator_with(vec![Product::priced("free-sample", 0)]);
        let result = validator.validate(&json!([{ "productId": "free-sample", "quantity": 1 }]));
        assert_eq!(result, Err(InvalidOrderError::InvalidTotal));
    }

    #[test]
    fn rejects_overflowing_total() {
        let validator = validator_with(vec![Product::priced("vault", i64::MAX / 2)]);
        let result = validator.validate(&json!([{ "productId": "vault", "quantity": 3 }]));
        assert_eq!(result, Err(InvalidOrderError::InvalidTotal));
    }

    #[test]
    fn typed_items_follow_the_same_rules() {
        let validator = validator();

        let order = validator
            .validate_items(&[CheckoutItemRequest::new("sm-board-001", 2)])
            .unwrap();
        assert_eq!(order.amount_cents(), 79_980);

        assert_eq!(validator.validate_items(&[]), Err(InvalidOrderError::Empty));
        assert_eq!(
            validator.validate_items(&[CheckoutItemRequest::new("sm-board-001", 21)]),
            Err(InvalidOrderError::InvalidProductOrQuantity { index: 0 })
        );
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Properties
    // ════════════════════════════════════════════════════════════════════════════

    proptest! {
        #[test]
        fn amount_is_sum_of_catalog_prices(
            lines in prop::collection::vec((0usize..4, 1i64..=20, any::<i64>()), 1..10)
        ) {
            let catalog = Catalog::seeded();
            let validator = OrderValidator::new(Arc::new(catalog.clone()));

            let items: Vec<Value> = lines
                .iter()
                .map(|(product, quantity, bogus_price)| {
                    json!({
                        "productId": catalog.products()[*product].id,
                        "quantity": quantity,
                        "priceCents": bogus_price,
                    })
                })
                .collect();

            let expected: i64 = lines
                .iter()
                .map(|(product, quantity, _)| catalog.products()[*product].price_cents * quantity)
                .sum();

            let order = validator.validate(&Value::Array(items)).unwrap();
            prop_assert_eq!(order.amount_cents(), expected);
            prop_assert_eq!(order.line_items().len(), lines.len());
        }

        #[test]
        fn quantities_outside_bounds_always_fail(quantity in prop_oneof![i64::MIN..1i64, 21i64..i64::MAX]) {
            let result = validator().validate(&json!([{ "productId": "sm-board-001", "quantity": quantity }]));
            prop_assert_eq!(result, Err(InvalidOrderError::InvalidProductOrQuantity { index: 0 }));
        }
    }
}
