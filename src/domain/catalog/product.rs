//! Product records served by the catalog.

use serde::{Deserialize, Serialize};

/// Product category shown in the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Furniture,
    Lighting,
    Boards,
    Objet,
}

/// Immutable product record.
///
/// `price_cents` is the authoritative unit price in minor currency units.
/// Checkout totals are always computed from this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub image: String,
    pub category: Category,
    pub in_stock: bool,
}

impl Product {
    /// Creates an in-stock product with empty presentation fields.
    ///
    /// Handy for test catalogs where only pricing matters.
    pub fn priced(id: impl Into<String>, price_cents: i64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            description: String::new(),
            price_cents,
            image: String::new(),
            category: Category::Objet,
            in_stock: true,
        }
    }

    /// Marks the product as out of stock.
    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }
}
