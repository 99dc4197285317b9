//! HTTP handlers for checkout endpoints.
//!
//! These handlers connect Axum routes to the checkout command handler.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::checkout::{StartCheckoutCommand, StartCheckoutHandler};
use crate::domain::catalog::Catalog;
use crate::domain::checkout::{CheckoutError, OrderValidator};
use crate::ports::PaymentGateway;

use super::dto::{CheckoutRequestBody, ErrorResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for checkout endpoints.
///
/// Cloned per request; the catalog is read-only and gateways are stateless.
#[derive(Clone)]
pub struct CheckoutAppState {
    pub catalog: Arc<Catalog>,
    pub ozow: Arc<dyn PaymentGateway>,
    pub peach: Arc<dyn PaymentGateway>,
}

impl CheckoutAppState {
    pub fn new(
        catalog: Arc<Catalog>,
        ozow: Arc<dyn PaymentGateway>,
        peach: Arc<dyn PaymentGateway>,
    ) -> Self {
        Self {
            catalog,
            ozow,
            peach,
        }
    }

    fn start_checkout_handler(&self, gateway: &Arc<dyn PaymentGateway>) -> StartCheckoutHandler {
        StartCheckoutHandler::new(OrderValidator::new(self.catalog.clone()), gateway.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/checkout/ozow - Build a signed Ozow redirect
pub async fn ozow_checkout(
    State(state): State<CheckoutAppState>,
    body: Bytes,
) -> Result<impl IntoResponse, CheckoutApiError> {
    let handler = state.start_checkout_handler(&state.ozow);
    let result = handler.handle(parse_command(&body)?).await?;
    Ok(Json(result))
}

/// POST /api/checkout/peach - Open a Peach Payments checkout session
pub async fn peach_checkout(
    State(state): State<CheckoutAppState>,
    body: Bytes,
) -> Result<impl IntoResponse, CheckoutApiError> {
    let handler = state.start_checkout_handler(&state.peach);
    let result = handler.handle(parse_command(&body)?).await?;
    Ok(Json(result))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/products - List the catalog
pub async fn list_products(State(state): State<CheckoutAppState>) -> impl IntoResponse {
    Json(state.catalog.products().to_vec())
}

/// GET /health - Liveness probe
pub async fn health() -> &'static str {
    "ok"
}

/// Parses the raw body so malformed JSON shares the `{ error }` shape.
fn parse_command(body: &[u8]) -> Result<StartCheckoutCommand, CheckoutApiError> {
    let request: CheckoutRequestBody = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected checkout body");
        CheckoutError::validation("Invalid request body.")
    })?;

    Ok(StartCheckoutCommand {
        customer: request.customer.unwrap_or_default(),
        items: request.items,
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts checkout errors to HTTP responses.
#[derive(Debug)]
pub struct CheckoutApiError(CheckoutError);

impl From<CheckoutError> for CheckoutApiError {
    fn from(err: CheckoutError) -> Self {
        Self(err)
    }
}

impl IntoResponse for CheckoutApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            CheckoutError::Validation(_) => StatusCode::BAD_REQUEST,
            CheckoutError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            CheckoutError::Gateway(_) => StatusCode::BAD_GATEWAY,
        };

        (status, Json(ErrorResponse::new(self.0.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{GatewayCheckout, GatewayCheckoutRequest, SignedRedirect};
    use async_trait::async_trait;
    use http_body_util::BodyExt;

    struct FixedGateway(Result<GatewayCheckout, CheckoutError>);

    #[async_trait]
    impl PaymentGateway for FixedGateway {
        fn name(&self) -> &'static str {
            "Fixed"
        }

        async fn initiate_checkout(
            &self,
            _request: GatewayCheckoutRequest,
        ) -> Result<GatewayCheckout, CheckoutError> {
            self.0.clone()
        }
    }

    fn state_with(ozow: Result<GatewayCheckout, CheckoutError>) -> CheckoutAppState {
        CheckoutAppState::new(
            Arc::new(Catalog::seeded()),
            Arc::new(FixedGateway(ozow)),
            Arc::new(FixedGateway(Err(CheckoutError::gateway("unused")))),
        )
    }

    fn redirect() -> GatewayCheckout {
        GatewayCheckout::Redirect(SignedRedirect {
            redirect_url: "https://pay.ozow.com/?SiteCode=SITE-001".to_string(),
            reference: "SM-1-abcdef01".to_string(),
            amount: "799.80".to_string(),
        })
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn ozow_checkout_returns_redirect_body() {
        let body = Bytes::from_static(
            br#"{"customer":{"name":"Ada","email":"ada@example.com"},"items":[{"productId":"sm-board-001","quantity":2}]}"#,
        );

        let response = ozow_checkout(State(state_with(Ok(redirect()))), body)
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "redirectUrl": "https://pay.ozow.com/?SiteCode=SITE-001",
                "reference": "SM-1-abcdef01",
                "amount": "799.80"
            })
        );
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let response = ozow_checkout(
            State(state_with(Ok(redirect()))),
            Bytes::from_static(b"{not json"),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Invalid request body." })
        );
    }

    #[tokio::test]
    async fn error_kinds_map_to_statuses() {
        let cases = [
            (CheckoutError::validation("bad"), StatusCode::BAD_REQUEST),
            (
                CheckoutError::configuration("Ozow", vec!["STOREFRONT__PAYMENT__OZOW__SITE_CODE"]),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (CheckoutError::gateway("declined"), StatusCode::BAD_GATEWAY),
        ];

        for (error, expected) in cases {
            let message = error.to_string();
            let response = CheckoutApiError::from(error).into_response();
            assert_eq!(response.status(), expected);
            assert_eq!(body_json(response).await, serde_json::json!({ "error": message }));
        }
    }

    #[tokio::test]
    async fn list_products_returns_catalog() {
        let response = list_products(State(state_with(Ok(redirect()))))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let products = body_json(response).await;
        let products = products.as_array().unwrap();
        assert_eq!(products.len(), 4);
        assert!(products
            .iter()
            .any(|p| p["id"] == "sm-board-001" && p["priceCents"] == 39990));
    }
}
