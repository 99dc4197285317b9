//! StartCheckoutHandler - Command handler for handing a cart off to a payment gateway.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::checkout::{CheckoutError, CustomerDetails, OrderValidator};
use crate::ports::{GatewayCheckout, GatewayCheckoutRequest, PaymentGateway};

/// Command to start a checkout with one gateway.
#[derive(Debug, Clone)]
pub struct StartCheckoutCommand {
    pub customer: CustomerDetails,

    /// Untrusted cart lines as received; prices are never read from here.
    pub items: Value,
}

/// Handler for starting a checkout.
///
/// Recomputes the order total from the catalog, then asks the gateway to
/// prepare the hosted payment hand-off. Nothing is persisted.
pub struct StartCheckoutHandler {
    validator: OrderValidator,
    gateway: Arc<dyn PaymentGateway>,
}

impl StartCheckoutHandler {
    pub fn new(validator: OrderValidator, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { validator, gateway }
    }

    pub async fn handle(&self, cmd: StartCheckoutCommand) -> Result<GatewayCheckout, CheckoutError> {
        // 1. Price the cart from the catalog
        let order = self.validator.validate(&cmd.items)?;

        tracing::debug!(
            gateway = self.gateway.name(),
            amount_cents = order.amount_cents(),
            lines = order.line_items().len(),
            "Order validated"
        );

        // 2. Hand off to the gateway
        let result = self
            .gateway
            .initiate_checkout(GatewayCheckoutRequest {
                order,
                customer: cmd.customer,
            })
            .await;

        if let Err(error) = &result {
            tracing::warn!(
                gateway = self.gateway.name(),
                code = error.code(),
                error = %error,
                "Checkout not started"
            );
        }

        result
    }
}
