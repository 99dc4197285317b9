//! Customer details supplied with a checkout request.

use serde::{Deserialize, Serialize};

use super::errors::CheckoutError;

/// Customer name and email as submitted by the caller.
///
/// Values are untrimmed; gateways decide which fields they require.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl CustomerDetails {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Trimmed name, `None` when missing or blank.
    pub fn trimmed_name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    /// Trimmed email, `None` when missing or blank.
    pub fn trimmed_email(&self) -> Option<&str> {
        non_blank(self.email.as_deref())
    }

    /// Requires both name and email.
    pub fn require_name_and_email(&self) -> Result<(&str, &str), CheckoutError> {
        match (self.trimmed_name(), self.trimmed_email()) {
            (Some(name), Some(email)) => Ok((name, email)),
            _ => Err(CheckoutError::validation("Customer details are required.")),
        }
    }

    /// Requires the email only.
    pub fn require_email(&self) -> Result<&str, CheckoutError> {
        self.trimmed_email()
            .ok_or_else(|| CheckoutError::validation("Customer email is required."))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
