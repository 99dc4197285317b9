//! Read-only product catalog.
//!
//! The catalog is built once at startup and shared behind an `Arc`. Nothing
//! mutates it afterwards, so concurrent checkouts can read it without locks.

use std::collections::HashMap;

use super::product::{Category, Product};

/// Immutable product lookup keyed by product id.
///
/// Keeps the seed ordering for listings alongside a map for lookups.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from a product list.
    ///
    /// If two products share an id, the later one wins for lookups.
    pub fn new(products: Vec<Product>) -> Self {
        let index = products
            .iter()
            .enumerate()
            .map(|(position, product)| (product.id.clone(), position))
            .collect();

        Self { products, index }
    }

    /// Catalog seeded with the storefront's fixed product list.
    pub fn seeded() -> Self {
        Self::new(seed_products())
    }

    /// Looks up a product by id.
    pub fn lookup(&self, product_id: &str) -> Option<&Product> {
        self.index
            .get(product_id)
            .and_then(|&position| self.products.get(position))
    }

    /// All products in seed order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "sm-coffee-table-001".to_string(),
            name: "Nero Coffee Table".to_string(),
            description: "Solid marble top with sculpted pedestal base.".to_string(),
            price_cents: 289_990,
            image: "https://images.unsplash.com/photo-1615874959474-d609969a20ed?auto=format&fit=crop&w=1200&q=80".to_string(),
            category: Category::Furniture,
            in_stock: true,
        },
        Product {
            id: "sm-pendant-001".to_string(),
            name: "Bianco Pendant".to_string(),
            description: "Marble shade pendant for warm ambient lighting.".to_string(),
            price_cents: 124_990,
            image: "https://images.unsplash.com/photo-1484101403633-562f891dc89a?auto=format&fit=crop&w=1200&q=80".to_string(),
            category: Category::Lighting,
            in_stock: true,
        },
        Product {
            id: "sm-board-001".to_string(),
            name: "Carrara Serving Board".to_string(),
            description: "Hand-finished board for kitchens and entertaining.".to_string(),
            price_cents: 39_990,
            image: "https://images.unsplash.com/photo-1610450949065-1f2841536c88?auto=format&fit=crop&w=1200&q=80".to_string(),
            category: Category::Boards,
            in_stock: true,
        },
        Product {
            id: "sm-objet-001".to_string(),
            name: "Marbella Orb".to_string(),
            description: "Collectible marble objet for shelves and consoles.".to_string(),
            price_cents: 59_990,
            image: "https://images.unsplash.com/photo-1523419409543-e8fe44818f95?auto=format&fit=crop&w=1200&q=80".to_string(),
            category: Category::Objet,
            in_stock: true,
        },
    ]
}
