//! Checkout redirect configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Where the hosted payment page sends the customer back to.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutConfig {
    #[serde(default = "default_success_url")]
    pub success_url: String,

    #[serde(default = "default_cancel_url")]
    pub cancel_url: String,

    #[serde(default = "default_error_url")]
    pub error_url: String,
}

impl CheckoutConfig {
    /// Validate that every return URL is absolute.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_url(&self.success_url, "CHECKOUT__SUCCESS_URL")?;
        check_url(&self.cancel_url, "CHECKOUT__CANCEL_URL")?;
        check_url(&self.error_url, "CHECKOUT__ERROR_URL")?;
        Ok(())
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            success_url: default_success_url(),
            cancel_url: default_cancel_url(),
            error_url: default_error_url(),
        }
    }
}

pub(super) fn check_url(value: &str, key: &'static str) -> Result<(), ValidationError> {
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidUrl(key))
}

fn default_success_url() -> String {
    "http://localhost:3000/checkout/success".to_string()
}

fn default_cancel_url() -> String {
    "http://localhost:3000/checkout/cancel".to_string()
}

fn default_error_url() -> String {
    "http://localhost:3000/checkout/error".to_string()
}
