//! Catalog domain module.
//!
//! Static product records and the read-only lookup used to price orders.

mod catalog;
mod product;

pub use catalog::Catalog;
pub use product::{Category, Product};
