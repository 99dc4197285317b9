//! Checkout HTTP adapter.
//!
//! Exposes the storefront's checkout, catalog and health endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CheckoutRequestBody, ErrorResponse};
pub use handlers::{CheckoutApiError, CheckoutAppState};
pub use routes::{checkout_router, checkout_routes};
