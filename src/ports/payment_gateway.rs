//! Payment gateway port for hosted payment page checkouts.
//!
//! Defines the contract for gateways that take a priced order and hand the
//! customer off to a provider-hosted payment page.
//!
//! # Design
//!
//! - **Gateway agnostic**: works for gateways that sign a redirect locally and
//!   for gateways that need a server-to-server session call first
//! - **Not idempotent**: every call creates a fresh transaction reference, and
//!   for session gateways a fresh remote session
//! - **No retries**: a failed call is reported, never replayed

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::checkout::{CheckoutError, CustomerDetails, ValidatedOrder};

/// Port for hosted-payment-page gateways.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Display name used in logs and configuration messages.
    fn name(&self) -> &'static str;

    /// Prepares the hand-off to the provider's hosted payment page.
    ///
    /// # Errors
    ///
    /// - `CheckoutError::Validation` when required customer fields are blank
    /// - `CheckoutError::Configuration` when credentials are missing; no
    ///   network call is made in that case
    /// - `CheckoutError::Gateway` when the provider rejects the request
    async fn initiate_checkout(
        &self,
        request: GatewayCheckoutRequest,
    ) -> Result<GatewayCheckout, CheckoutError>;
}

/// Input to a gateway: a catalog-priced order and the customer.
#[derive(Debug, Clone)]
pub struct GatewayCheckoutRequest {
    pub order: ValidatedOrder,
    pub customer: CustomerDetails,
}

/// Outcome of a successful gateway hand-off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GatewayCheckout {
    /// Locally constructed, signed redirect.
    Redirect(SignedRedirect),

    /// Hosted checkout page for a remote session.
    HostedCheckout(HostedCheckout),

    /// Session created but no hosted page is configured to redirect to.
    Pending(PendingCheckout),
}

/// Signed redirect to a hosted payment page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedRedirect {
    pub redirect_url: String,
    pub reference: String,
    pub amount: String,
}

/// Hosted checkout page bound to a provider session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedCheckout {
    pub hosted_checkout_url: String,
    pub checkout_id: String,
    pub amount: String,
}

/// Informational result when no redirect can be offered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCheckout {
    pub message: String,
}
