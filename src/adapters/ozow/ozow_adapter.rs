//! Ozow hosted payment page adapter.
//!
//! Implements the `PaymentGateway` port by building a signed redirect URL
//! locally. No network call is made; the customer's browser carries the
//! signed query string to Ozow.
//!
//! # Security
//!
//! - The private key is only ever hash input; it is never placed in the URL,
//!   the returned result, or log fields
//! - Secrets are held in `secrecy::SecretString`
//!
//! # Configuration
//!
//! ```ignore
//! let config = OzowConfig::new("SITE-001", private_key).with_test_mode(true);
//! let gateway = OzowGateway::new(config);
//! ```

use async_trait::async_trait;
use secrecy::SecretString;
use url::Url;

use crate::config::{CheckoutConfig, OzowSettings};
use crate::domain::checkout::{
    CheckoutError, CustomerDetails, TransactionReference, ValidatedOrder,
};
use crate::ports::{GatewayCheckout, GatewayCheckoutRequest, PaymentGateway, SignedRedirect};

use super::signature::{SignatureScheme, SignedFields, COUNTRY_CODE, CURRENCY_CODE};

const GATEWAY_NAME: &str = "Ozow";

const SITE_CODE_KEY: &str = "STOREFRONT__PAYMENT__OZOW__SITE_CODE";
const PRIVATE_KEY_KEY: &str = "STOREFRONT__PAYMENT__OZOW__PRIVATE_KEY";
const ENDPOINT_KEY: &str = "STOREFRONT__PAYMENT__OZOW__ENDPOINT";

/// Ozow redirect configuration.
#[derive(Clone, Debug)]
pub struct OzowConfig {
    site_code: Option<String>,

    /// Merchant private key, hash input only.
    private_key: Option<SecretString>,

    is_test: bool,

    /// Hosted payment page endpoint (default: https://pay.ozow.com).
    endpoint: String,

    success_url: String,
    cancel_url: String,
    error_url: String,

    scheme: SignatureScheme,
}

impl OzowConfig {
    /// Create a configuration with credentials and default URLs.
    pub fn new(site_code: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            site_code: Some(site_code.into()),
            private_key: Some(SecretString::new(private_key.into())),
            ..Self::unconfigured()
        }
    }

    /// Configuration without credentials. Checkouts fail with a
    /// configuration error until credentials are supplied.
    pub fn unconfigured() -> Self {
        let defaults = CheckoutConfig::default();
        Self {
            site_code: None,
            private_key: None,
            is_test: false,
            endpoint: OzowSettings::default().endpoint,
            success_url: defaults.success_url,
            cancel_url: defaults.cancel_url,
            error_url: defaults.error_url,
            scheme: SignatureScheme::default(),
        }
    }

    /// Build from loaded application settings.
    pub fn from_settings(settings: &OzowSettings, checkout: &CheckoutConfig) -> Self {
        Self {
            site_code: non_empty(settings.site_code.as_deref()).map(str::to_string),
            private_key: non_empty(settings.private_key.as_deref())
                .map(|key| SecretString::new(key.to_string())),
            is_test: settings.is_test,
            endpoint: settings.endpoint.clone(),
            success_url: checkout.success_url.clone(),
            cancel_url: checkout.cancel_url.clone(),
            error_url: checkout.error_url.clone(),
            scheme: SignatureScheme::default(),
        }
    }

    /// Set a custom endpoint (for sandboxes or testing).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Flag redirects as test transactions.
    pub fn with_test_mode(mut self, is_test: bool) -> Self {
        self.is_test = is_test;
        self
    }

    /// Set the success, cancel and error return URLs.
    pub fn with_return_urls(
        mut self,
        success_url: impl Into<String>,
        cancel_url: impl Into<String>,
        error_url: impl Into<String>,
    ) -> Self {
        self.success_url = success_url.into();
        self.cancel_url = cancel_url.into();
        self.error_url = error_url.into();
        self
    }

    /// Site code and private key, or the keys that are missing.
    fn credentials(&self) -> Result<(&str, &SecretString), CheckoutError> {
        match (self.site_code.as_deref(), self.private_key.as_ref()) {
            (Some(site_code), Some(private_key)) => Ok((site_code, private_key)),
            (site_code, private_key) => {
                let mut missing = Vec::new();
                if site_code.is_none() {
                    missing.push(SITE_CODE_KEY);
                }
                if private_key.is_none() {
                    missing.push(PRIVATE_KEY_KEY);
                }
                Err(CheckoutError::configuration(GATEWAY_NAME, missing))
            }
        }
    }
}

/// Ozow payment gateway adapter.
pub struct OzowGateway {
    config: OzowConfig,
}

impl OzowGateway {
    pub fn new(config: OzowConfig) -> Self {
        Self { config }
    }

    /// Build the signed redirect for a given transaction reference.
    ///
    /// Pure: the same inputs always produce the same URL.
    ///
    /// # Errors
    ///
    /// - `Validation` when customer name or email is blank
    /// - `Configuration` when site code or private key is missing
    pub fn build_redirect(
        &self,
        order: &ValidatedOrder,
        customer: &CustomerDetails,
        reference: &TransactionReference,
    ) -> Result<SignedRedirect, CheckoutError> {
        let (customer_name, customer_email) = customer.require_name_and_email()?;
        let (site_code, private_key) = self.config.credentials()?;

        let amount = order.amount_decimal();
        let fields = SignedFields {
            site_code,
            amount: &amount,
            transaction_reference: reference.as_str(),
            bank_reference: reference.as_str(),
            cancel_url: &self.config.cancel_url,
            error_url: &self.config.error_url,
            success_url: &self.config.success_url,
            is_test: self.config.is_test,
        };
        let hash_check = self.config.scheme.hash_check(&fields, private_key);

        let base = format!("{}/", self.config.endpoint.trim_end_matches('/'));
        let redirect_url = Url::parse_with_params(
            &base,
            &[
                ("SiteCode", fields.site_code),
                ("CountryCode", COUNTRY_CODE),
                ("CurrencyCode", CURRENCY_CODE),
                ("Amount", fields.amount),
                ("TransactionReference", fields.transaction_reference),
                ("BankReference", fields.bank_reference),
                ("Customer", customer_name),
                ("CustomerEmail", customer_email),
                ("CancelUrl", fields.cancel_url),
                ("ErrorUrl", fields.error_url),
                ("SuccessUrl", fields.success_url),
                ("IsTest", fields.is_test_flag()),
                ("HashCheck", hash_check.as_str()),
            ],
        )
        .map_err(|e| {
            tracing::error!(error = %e, endpoint = %self.config.endpoint, "Invalid Ozow endpoint");
            CheckoutError::configuration(GATEWAY_NAME, vec![ENDPOINT_KEY])
        })?;

        Ok(SignedRedirect {
            redirect_url: redirect_url.into(),
            reference: reference.to_string(),
            amount,
        })
    }
}

#[async_trait]
impl PaymentGateway for OzowGateway {
    fn name(&self) -> &'static str {
        GATEWAY_NAME
    }

    async fn initiate_checkout(
        &self,
        request: GatewayCheckoutRequest,
    ) -> Result<GatewayCheckout, CheckoutError> {
        let reference = TransactionReference::generate();
        let redirect = self.build_redirect(&request.order, &request.customer, &reference)?;

        tracing::info!(
            reference = %redirect.reference,
            amount = %redirect.amount,
            test_mode = self.config.is_test,
            "Ozow redirect prepared"
        );

        Ok(GatewayCheckout::Redirect(redirect))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
