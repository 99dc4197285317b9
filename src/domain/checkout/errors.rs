//! Checkout error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | Validation | 400 |
//! | Configuration | 500 |
//! | Gateway | 502 |

use thiserror::Error;

/// Reasons an untrusted item list is rejected by the order validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidOrderError {
    #[error("Order must include at least one item.")]
    Empty,

    #[error("Invalid order item.")]
    MalformedItem { index: usize },

    #[error("Invalid product or quantity.")]
    InvalidProductOrQuantity { index: usize },

    #[error("Product unavailable: {product_id}")]
    ProductUnavailable { product_id: String },

    #[error("Invalid order total.")]
    InvalidTotal,
}

/// Errors surfaced by a checkout attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// Malformed or semantically invalid input. Never retried.
    #[error("{0}")]
    Validation(String),

    /// A required gateway credential is not configured.
    #[error("{} is not configured. Add {} in env.", .gateway, .missing_keys.join(", "))]
    Configuration {
        gateway: &'static str,
        missing_keys: Vec<&'static str>,
    },

    /// The upstream provider rejected the request or answered unusably.
    #[error("{0}")]
    Gateway(String),
}

impl CheckoutError {
    pub fn validation(message: impl Into<String>) -> Self {
        CheckoutError::Validation(message.into())
    }

    pub fn configuration(gateway: &'static str, missing_keys: Vec<&'static str>) -> Self {
        CheckoutError::Configuration {
            gateway,
            missing_keys,
        }
    }

    pub fn gateway(message: impl Into<String>) -> Self {
        CheckoutError::Gateway(message.into())
    }

    /// Stable machine-readable code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            CheckoutError::Validation(_) => "validation_failed",
            CheckoutError::Configuration { .. } => "gateway_not_configured",
            CheckoutError::Gateway(_) => "gateway_error",
        }
    }
}

impl From<InvalidOrderError> for CheckoutError {
    fn from(err: InvalidOrderError) -> Self {
        CheckoutError::Validation(err.to_string())
    }
}
