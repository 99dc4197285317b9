//! Payment gateway configuration
//!
//! Gateway credentials are optional at load time. A gateway with missing
//! credentials still starts; its checkout route answers with a configuration
//! error naming the keys to set.

use serde::Deserialize;

use super::checkout::check_url;
use super::error::ValidationError;

/// Payment configuration for both hosted payment gateways
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentConfig {
    /// Hash-signed redirect gateway (Ozow)
    #[serde(default)]
    pub ozow: OzowSettings,

    /// Token-authenticated session gateway (Peach Payments)
    #[serde(default)]
    pub peach: PeachSettings,
}

/// Ozow settings
#[derive(Debug, Clone, Deserialize)]
pub struct OzowSettings {
    pub site_code: Option<String>,

    /// Shared private key used only as hash input
    pub private_key: Option<String>,

    #[serde(default)]
    pub is_test: bool,

    #[serde(default = "default_ozow_endpoint")]
    pub endpoint: String,
}

/// Peach Payments settings
#[derive(Debug, Clone, Deserialize)]
pub struct PeachSettings {
    pub base_url: Option<String>,

    pub access_token: Option<String>,

    pub entity_id: Option<String>,

    /// Page hosting the payment widget; without it no redirect is offered
    pub hosted_checkout_url: Option<String>,

    /// Outbound request timeout in seconds
    #[serde(default = "default_peach_timeout")]
    pub timeout_secs: u64,
}

impl PaymentConfig {
    /// Validate payment configuration
    ///
    /// Only checks the shape of values that are present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ozow.validate()?;
        self.peach.validate()?;
        Ok(())
    }
}

impl OzowSettings {
    pub fn is_configured(&self) -> bool {
        is_set(&self.site_code) && is_set(&self.private_key)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        check_url(&self.endpoint, "PAYMENT__OZOW__ENDPOINT")
    }
}

impl Default for OzowSettings {
    fn default() -> Self {
        Self {
            site_code: None,
            private_key: None,
            is_test: false,
            endpoint: default_ozow_endpoint(),
        }
    }
}

impl PeachSettings {
    pub fn is_configured(&self) -> bool {
        is_set(&self.base_url) && is_set(&self.access_token) && is_set(&self.entity_id)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(base_url) = self.base_url.as_deref().filter(|v| !v.is_empty()) {
            check_url(base_url, "PAYMENT__PEACH__BASE_URL")?;
        }
        if let Some(hosted) = self.hosted_checkout_url.as_deref().filter(|v| !v.is_empty()) {
            check_url(hosted, "PAYMENT__PEACH__HOSTED_CHECKOUT_URL")?;
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for PeachSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            access_token: None,
            entity_id: None,
            hosted_checkout_url: None,
            timeout_secs: default_peach_timeout(),
        }
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn default_ozow_endpoint() -> String {
    "https://pay.ozow.com".to_string()
}

fn default_peach_timeout() -> u64 {
    15
}
