//! Peach Payments hosted checkout adapter.
//!
//! Implements the `PaymentGateway` port by opening a checkout session with a
//! bearer-authenticated, form-encoded POST and pointing the customer at the
//! hosted payment widget for that session.
//!
//! # Security
//!
//! - Access token held in `secrecy::SecretString`, sent only as a bearer header
//! - Upstream error bodies are logged, only `result.description` is surfaced
//!
//! # Configuration
//!
//! ```ignore
//! let config = PeachConfig::new(base_url, access_token, entity_id)
//!     .with_hosted_checkout_url("https://shop.example.com/pay");
//! let gateway = PeachGateway::new(config);
//! ```

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::config::PeachSettings;
use crate::domain::checkout::{CheckoutError, CustomerDetails, TransactionReference, ValidatedOrder};
use crate::ports::{
    GatewayCheckout, GatewayCheckoutRequest, HostedCheckout, PaymentGateway, PendingCheckout,
};

const GATEWAY_NAME: &str = "Peach";

const BASE_URL_KEY: &str = "STOREFRONT__PAYMENT__PEACH__BASE_URL";
const ACCESS_TOKEN_KEY: &str = "STOREFRONT__PAYMENT__PEACH__ACCESS_TOKEN";
const ENTITY_ID_KEY: &str = "STOREFRONT__PAYMENT__PEACH__ENTITY_ID";
const HOSTED_CHECKOUT_URL_KEY: &str = "STOREFRONT__PAYMENT__PEACH__HOSTED_CHECKOUT_URL";

const CURRENCY: &str = "ZAR";

/// Debit: authorize and capture in one step.
const PAYMENT_TYPE: &str = "DB";

const DEFAULT_FAILURE_MESSAGE: &str = "Failed to initialize Peach checkout.";

/// Peach Payments configuration.
#[derive(Clone, Debug)]
pub struct PeachConfig {
    /// API base URL (e.g. https://test.oppwa.com).
    base_url: Option<String>,

    access_token: Option<SecretString>,

    entity_id: Option<String>,

    /// Widget page that accepts `?checkoutId=`.
    hosted_checkout_url: Option<String>,

    timeout: Duration,
}

impl PeachConfig {
    /// Create a configuration with all required credentials.
    pub fn new(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
        entity_id: impl Into<String>,
    ) -> Self {
        Self {
            base_url: Some(base_url.into()),
            access_token: Some(SecretString::new(access_token.into())),
            entity_id: Some(entity_id.into()),
            ..Self::unconfigured()
        }
    }

    /// Configuration without credentials.
    pub fn unconfigured() -> Self {
        Self {
            base_url: None,
            access_token: None,
            entity_id: None,
            hosted_checkout_url: None,
            timeout: Duration::from_secs(PeachSettings::default().timeout_secs),
        }
    }

    /// Build from loaded application settings.
    pub fn from_settings(settings: &PeachSettings) -> Self {
        Self {
            base_url: non_empty(settings.base_url.as_deref()).map(str::to_string),
            access_token: non_empty(settings.access_token.as_deref())
                .map(|token| SecretString::new(token.to_string())),
            entity_id: non_empty(settings.entity_id.as_deref()).map(str::to_string),
            hosted_checkout_url: non_empty(settings.hosted_checkout_url.as_deref())
                .map(str::to_string),
            timeout: Duration::from_secs(settings.timeout_secs),
        }
    }

    /// Set the hosted widget page customers are redirected to.
    pub fn with_hosted_checkout_url(mut self, url: impl Into<String>) -> Self {
        self.hosted_checkout_url = Some(url.into());
        self
    }

    /// Set the outbound request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn credentials(&self) -> Result<(&str, &SecretString, &str), CheckoutError> {
        match (
            self.base_url.as_deref(),
            self.access_token.as_ref(),
            self.entity_id.as_deref(),
        ) {
            (Some(base_url), Some(token), Some(entity_id)) => Ok((base_url, token, entity_id)),
            (base_url, token, entity_id) => {
                let mut missing = Vec::new();
                if base_url.is_none() {
                    missing.push(BASE_URL_KEY);
                }
                if token.is_none() {
                    missing.push(ACCESS_TOKEN_KEY);
                }
                if entity_id.is_none() {
                    missing.push(ENTITY_ID_KEY);
                }
                Err(CheckoutError::configuration(GATEWAY_NAME, missing))
            }
        }
    }
}

/// Body returned by `POST /v1/checkouts`.
#[derive(Debug, Deserialize)]
struct PeachCheckoutResponse {
    id: Option<String>,
    result: Option<PeachResult>,
}

#[derive(Debug, Deserialize)]
struct PeachResult {
    code: Option<String>,
    description: Option<String>,
}

impl PeachCheckoutResponse {
    fn description(&self) -> Option<&str> {
        self.result
            .as_ref()
            .and_then(|r| r.description.as_deref())
            .filter(|d| !d.trim().is_empty())
    }
}

/// Peach Payments gateway adapter.
pub struct PeachGateway {
    config: PeachConfig,
    http_client: reqwest::Client,
}

impl PeachGateway {
    /// Create a new adapter; the HTTP client carries the configured timeout.
    pub fn new(config: PeachConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default Peach HTTP client");
                reqwest::Client::new()
            });

        Self {
            config,
            http_client,
        }
    }

    /// Open a remote checkout session for `order`.
    ///
    /// Makes exactly one outbound request, and none when validation or
    /// configuration fails.
    pub async fn create_checkout(
        &self,
        order: &ValidatedOrder,
        customer: &CustomerDetails,
        merchant_transaction_id: &TransactionReference,
    ) -> Result<GatewayCheckout, CheckoutError> {
        let customer_email = customer.require_email()?;
        let (base_url, access_token, entity_id) = self.config.credentials()?;

        let amount = order.amount_decimal();
        let url = format!("{}/v1/checkouts", base_url.trim_end_matches('/'));

        let params = [
            ("entityId", entity_id),
            ("amount", amount.as_str()),
            ("currency", CURRENCY),
            ("paymentType", PAYMENT_TYPE),
            ("merchantTransactionId", merchant_transaction_id.as_str()),
            ("customer.email", customer_email),
        ];

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(access_token.expose_secret())
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Peach create_checkout request failed");
                CheckoutError::gateway(DEFAULT_FAILURE_MESSAGE)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!(error = %e, %status, "Failed to read Peach response");
            CheckoutError::gateway(DEFAULT_FAILURE_MESSAGE)
        })?;

        let parsed: Option<PeachCheckoutResponse> = serde_json::from_str(&body)
            .map_err(|e| {
                tracing::warn!(error = %e, %status, "Failed to parse Peach response");
            })
            .ok();

        let checkout_id = match parsed.as_ref() {
            Some(PeachCheckoutResponse { id: Some(id), .. })
                if status.is_success() && !id.is_empty() =>
            {
                id.clone()
            }
            _ => {
                let description = parsed.as_ref().and_then(PeachCheckoutResponse::description);
                tracing::error!(
                    %status,
                    result_code = parsed
                        .as_ref()
                        .and_then(|p| p.result.as_ref())
                        .and_then(|r| r.code.as_deref())
                        .unwrap_or("none"),
                    reference = %merchant_transaction_id,
                    "Peach create_checkout failed"
                );
                return Err(CheckoutError::gateway(
                    description.unwrap_or(DEFAULT_FAILURE_MESSAGE),
                ));
            }
        };

        tracing::info!(
            checkout_id = %checkout_id,
            reference = %merchant_transaction_id,
            amount = %amount,
            "Peach checkout session created"
        );

        let Some(hosted_base) = self.config.hosted_checkout_url.as_deref() else {
            return Ok(GatewayCheckout::Pending(PendingCheckout {
                message: format!(
                    "Checkout initialized. Add {} to auto-redirect to your payment widget page.",
                    HOSTED_CHECKOUT_URL_KEY
                ),
            }));
        };

        let hosted_checkout_url = Url::parse_with_params(hosted_base, &[("checkoutId", &checkout_id)])
            .map_err(|e| {
                tracing::error!(error = %e, "Invalid Peach hosted checkout URL");
                CheckoutError::configuration(GATEWAY_NAME, vec![HOSTED_CHECKOUT_URL_KEY])
            })?;

        Ok(GatewayCheckout::HostedCheckout(HostedCheckout {
            hosted_checkout_url: hosted_checkout_url.into(),
            checkout_id,
            amount,
        }))
    }
}

#[async_trait]
impl PaymentGateway for PeachGateway {
    fn name(&self) -> &'static str {
        GATEWAY_NAME
    }

    async fn initiate_checkout(
        &self,
        request: GatewayCheckoutRequest,
    ) -> Result<GatewayCheckout, CheckoutError> {
        let reference = TransactionReference::generate();
        self.create_checkout(&request.order, &request.customer, &reference)
            .await
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
