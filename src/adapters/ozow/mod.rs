//! Ozow payment gateway adapter.
//!
//! Implements the `PaymentGateway` port with a locally signed redirect to
//! Ozow's hosted payment page.
//!
//! # Security
//!
//! - `HashCheck` is a SHA-512 digest over the redirect fields and the merchant
//!   private key
//! - The private key is never transmitted
//!
//! # Configuration
//!
//! - `STOREFRONT__PAYMENT__OZOW__SITE_CODE`: merchant site code
//! - `STOREFRONT__PAYMENT__OZOW__PRIVATE_KEY`: merchant private key
//! - `STOREFRONT__PAYMENT__OZOW__IS_TEST`: test transactions (default false)
//! - `STOREFRONT__PAYMENT__OZOW__ENDPOINT`: hosted page (default https://pay.ozow.com)

mod ozow_adapter;
mod signature;

pub use ozow_adapter::{OzowConfig, OzowGateway};
pub use signature::{SignatureScheme, SignedFields, COUNTRY_CODE, CURRENCY_CODE};
