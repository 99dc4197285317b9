//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Payment Ports
//!
//! - `PaymentGateway` - Hosted payment page hand-off (signed redirect or
//!   remote checkout session)

mod payment_gateway;

pub use payment_gateway::{
    GatewayCheckout, GatewayCheckoutRequest, HostedCheckout, PaymentGateway, PendingCheckout,
    SignedRedirect,
};
