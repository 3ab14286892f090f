//! Stripe Checkout Sessions client.

use std::fmt;

use async_trait::async_trait;
use herbarium::prices::to_minor_units;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;
use zeroize::Zeroize;

use crate::checkout::{
    CheckoutOrder, CheckoutService, CheckoutServiceError, CheckoutSession, validate_order,
};

/// Default Stripe API address.
pub const DEFAULT_STRIPE_API_BASE: &str = "https://api.stripe.com";

/// Currency sessions are charged in.
const SESSION_CURRENCY: &str = "gbp";

/// Stripe secret API key. Wiped on drop and never printed.
#[derive(Clone)]
pub struct StripeSecretKey(String);

impl StripeSecretKey {
    /// Wrap a raw key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for request authentication.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StripeSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StripeSecretKey(**redacted**)")
    }
}

impl Drop for StripeSecretKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Configuration for connecting to Stripe.
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Secret API key
    pub secret_key: StripeSecretKey,

    /// API address, e.g. `"https://api.stripe.com"`
    pub api_base: String,
}

/// Errors that can occur when communicating with Stripe.
#[derive(Debug, Error)]
pub enum StripeError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Stripe returned a non-2xx response.
    #[error("stripe request failed with status {status}: {message}")]
    UnexpectedResponse {
        /// HTTP status code
        status: u16,

        /// Stripe's error message, or the raw body
        message: String,
    },

    /// The created session has no hosted page URL.
    #[error("stripe session {0} has no url")]
    MissingUrl(String),
}

/// [`CheckoutService`] creating hosted Stripe Checkout Sessions.
#[derive(Debug, Clone)]
pub struct StripeCheckoutService {
    config: StripeConfig,
    http: Client,
}

impl StripeCheckoutService {
    /// Create a new service from the given configuration.
    #[must_use]
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    async fn post_session(&self, form: &[(String, String)]) -> Result<CheckoutSession, StripeError> {
        let url = format!(
            "{}/v1/checkout/sessions",
            self.config.api_base.trim_end_matches('/')
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.config.secret_key.expose())
            .header("Idempotency-Key", Uuid::now_v7().to_string())
            .form(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();

            return Err(StripeError::UnexpectedResponse {
                status,
                message: stripe_error_message(&text),
            });
        }

        let session: SessionResponse = response.json().await?;

        let url = session.url.ok_or_else(|| StripeError::MissingUrl(session.id.clone()))?;

        Ok(CheckoutSession {
            id: session.id,
            url,
        })
    }
}

#[async_trait]
impl CheckoutService for StripeCheckoutService {
    async fn create_session(
        &self,
        order: CheckoutOrder,
    ) -> Result<CheckoutSession, CheckoutServiceError> {
        let form = session_form(&order)?;

        debug!(lines = order.items.len(), "creating stripe checkout session");

        let session = self.post_session(&form).await?;

        info!(session_id = %session.id, "stripe checkout session created");

        Ok(session)
    }
}

/// Form fields for a Checkout Session charging for every line of the order.
///
/// # Errors
///
/// Returns an error when the order fails validation or a price cannot be expressed in pence.
pub fn session_form(order: &CheckoutOrder) -> Result<Vec<(String, String)>, CheckoutServiceError> {
    validate_order(order)?;

    let mut form = vec![
        ("mode".to_string(), "payment".to_string()),
        ("success_url".to_string(), order.success_url()),
        ("cancel_url".to_string(), order.cancel_url()),
    ];

    for (index, item) in order.items.iter().enumerate() {
        let unit_amount = to_minor_units(item.price)
            .ok_or_else(|| CheckoutServiceError::InvalidItem(item.product_id.clone()))?;

        let prefix = format!("line_items[{index}]");

        form.extend([
            (
                format!("{prefix}[price_data][currency]"),
                SESSION_CURRENCY.to_string(),
            ),
            (
                format!("{prefix}[price_data][product_data][name]"),
                item.name.clone(),
            ),
            (
                format!("{prefix}[price_data][product_data][images][0]"),
                item.image.clone(),
            ),
            (
                format!("{prefix}[price_data][unit_amount]"),
                unit_amount.to_string(),
            ),
            (format!("{prefix}[quantity]"), item.quantity.to_string()),
        ]);
    }

    Ok(form)
}

fn stripe_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map_or_else(|_err| body.to_string(), |parsed| parsed.error.message)
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    id: String,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}
