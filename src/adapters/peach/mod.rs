//! Peach Payments gateway adapter.
//!
//! Implements the `PaymentGateway` port with a server-to-server checkout
//! session request followed by a redirect to the hosted payment widget.
//!
//! # Configuration
//!
//! - `STOREFRONT__PAYMENT__PEACH__BASE_URL`: API base URL
//! - `STOREFRONT__PAYMENT__PEACH__ACCESS_TOKEN`: bearer token
//! - `STOREFRONT__PAYMENT__PEACH__ENTITY_ID`: merchant entity
//! - `STOREFRONT__PAYMENT__PEACH__HOSTED_CHECKOUT_URL`: widget page (optional)
//! - `STOREFRONT__PAYMENT__PEACH__TIMEOUT_SECS`: outbound timeout (default 15)

mod peach_adapter;

pub use peach_adapter::{PeachConfig, PeachGateway};
