//! Request and response DTOs for checkout endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::checkout::CustomerDetails;

/// Body of `POST /api/checkout/{gateway}`.
///
/// Both fields are optional so that missing pieces are reported by the
/// validators with their own messages rather than as a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckoutRequestBody {
    pub customer: Option<CustomerDetails>,

    /// Untrusted cart lines, validated against the catalog.
    pub items: Value,
}

/// Uniform error body: `{ "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
