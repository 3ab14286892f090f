//! Checkout Models

use herbarium::cart::CartLineItem;
use serde::{Deserialize, Serialize};

/// Origin used for redirect URLs when the caller does not supply one.
pub const DEFAULT_SITE_ORIGIN: &str = "http://localhost:3000";

/// Checkout Order
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutOrder {
    /// Lines to charge for
    pub items: Vec<CartLineItem>,

    /// Site origin the payment page redirects back to, e.g. `https://example.com`
    pub origin: String,
}

impl CheckoutOrder {
    /// Page the payment processor returns to after payment.
    pub fn success_url(&self) -> String {
        format!(
            "{}/checkout/success?session_id={{CHECKOUT_SESSION_ID}}",
            self.origin.trim_end_matches('/')
        )
    }

    /// Page the payment processor returns to when the client backs out.
    pub fn cancel_url(&self) -> String {
        format!("{}/cart", self.origin.trim_end_matches('/'))
    }
}

/// Checkout Session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    /// Processor session identifier
    pub id: String,

    /// Hosted payment page
    pub url: String,
}

/// Body posted to the checkout endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Cart lines
    pub items: Vec<CartLineItem>,
}

/// Successful checkout endpoint response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutResponse {
    /// Where to send the client
    pub url: String,
}
