//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum routes for checkout, catalog and health
//! - `ozow` - Hash-signed redirect gateway
//! - `peach` - Token-authenticated session gateway

pub mod http;
pub mod ozow;
pub mod peach;

pub use ozow::{OzowConfig, OzowGateway};
pub use peach::{PeachConfig, PeachGateway};
