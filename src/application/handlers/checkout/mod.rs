//! Checkout command handlers.

mod start_checkout;

pub use start_checkout::{StartCheckoutCommand, StartCheckoutHandler};
