//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `catalog` - Read-only product catalog
//! - `checkout` - Order validation, pricing, and checkout errors

pub mod catalog;
pub mod checkout;
