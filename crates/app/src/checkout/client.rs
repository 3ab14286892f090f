//! HTTP client for the checkout endpoint.

use async_trait::async_trait;
use herbarium::cart::CartLineItem;
use mockall::automock;
use reqwest::{Client, Url, header::ACCEPT};
use serde::Deserialize;
use tracing::warn;

use crate::checkout::{CheckoutClientError, CheckoutRequest, CheckoutResponse};

/// Shown when the endpoint fails without saying why.
pub const GENERIC_CHECKOUT_ERROR: &str = "Something went wrong. Please try again.";

#[automock]
#[async_trait]
pub trait CheckoutClient: Send + Sync {
    /// Send the cart lines to the checkout endpoint and return the payment page URL.
    async fn start_checkout(&self, items: &[CartLineItem]) -> Result<String, CheckoutClientError>;
}

/// [`CheckoutClient`] posting JSON to a checkout endpoint.
#[derive(Debug, Clone)]
pub struct HttpCheckoutClient {
    endpoint: Url,
    http: Client,
}

impl HttpCheckoutClient {
    /// Create a client for the given endpoint, e.g. `http://localhost:8698/api/checkout`.
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl CheckoutClient for HttpCheckoutClient {
    async fn start_checkout(&self, items: &[CartLineItem]) -> Result<String, CheckoutClientError> {
        let body = CheckoutRequest {
            items: items.to_vec(),
        };

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(CheckoutClientError::Transport)?;

        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();

            warn!(status = status.as_u16(), "checkout endpoint rejected the cart");

            return Err(CheckoutClientError::Rejected {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        let parsed: CheckoutResponse = response
            .json()
            .await
            .map_err(CheckoutClientError::Transport)?;

        Ok(parsed.url)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorField {
    Message(String),
    Status { brief: String },
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorField,
}

/// Pick the message out of an error response body.
///
/// Understands `{"error": "..."}` and salvo's `{"error": {"brief": "..."}}`; anything else gets
/// [`GENERIC_CHECKOUT_ERROR`].
pub fn error_message(body: &str) -> String {
    let message = match serde_json::from_str::<ErrorBody>(body).map(|body| body.error) {
        Ok(ErrorField::Message(message) | ErrorField::Status { brief: message }) => message,
        Err(_err) => String::new(),
    };

    if message.trim().is_empty() {
        GENERIC_CHECKOUT_ERROR.to_string()
    } else {
        message
    }
}
