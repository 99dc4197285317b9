//! Checkout domain module.
//!
//! Turns an untrusted cart into a catalog-priced order and carries the
//! per-attempt values a payment gateway needs.
//!
//! # Module Structure
//!
//! - `order` - Order validator and priced order types
//! - `customer` - Customer details and per-gateway requirements
//! - `reference` - Transaction reference generation
//! - `money` - Minor-unit amount formatting
//! - `errors` - Checkout error taxonomy

mod customer;
mod errors;
mod money;
mod order;
mod reference;

pub use customer::CustomerDetails;
pub use errors::{CheckoutError, InvalidOrderError};
pub use money::format_cents;
pub use order::{
    CheckoutItemRequest, LineItem, OrderValidator, ValidatedOrder, MAX_QUANTITY, MIN_QUANTITY,
};
pub use reference::TransactionReference;
