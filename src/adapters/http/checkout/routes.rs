//! Axum router configuration for checkout endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{health, list_products, ozow_checkout, peach_checkout, CheckoutAppState};

/// Create the checkout API routes.
///
/// # Routes
/// - `POST /ozow` - Signed redirect to Ozow
/// - `POST /peach` - Peach Payments hosted checkout session
pub fn checkout_routes() -> Router<CheckoutAppState> {
    Router::new()
        .route("/ozow", post(ozow_checkout))
        .route("/peach", post(peach_checkout))
}

/// Create the complete storefront router.
///
/// # Example
///
/// ```ignore
/// let app = checkout_router().with_state(CheckoutAppState::new(catalog, ozow, peach));
/// ```
pub fn checkout_router() -> Router<CheckoutAppState> {
    Router::new()
        .nest("/api/checkout", checkout_routes())
        .route("/api/products", get(list_products))
        .route("/health", get(health))
}
