//! Checkout errors.

use thiserror::Error;

use crate::checkout::stripe::StripeError;

#[derive(Debug, Error)]
pub enum CheckoutServiceError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Invalid cart item: {0}")]
    InvalidItem(String),

    #[error(
        "Stripe is not configured. Add STRIPE_SECRET_KEY to your environment variables to enable checkout."
    )]
    NotConfigured,

    #[error("Failed to create checkout session. Please try again.")]
    Gateway(#[from] StripeError),
}

#[derive(Debug, Error)]
pub enum CheckoutClientError {
    /// The endpoint answered with a non-success status
    #[error("{message}")]
    Rejected {
        /// HTTP status code
        status: u16,

        /// Message for the client
        message: String,
    },

    /// The endpoint could not be reached or answered with an unreadable body
    #[error("Unable to connect to checkout. Please try again.")]
    Transport(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum CheckoutFlowError {
    #[error("Your basket is empty")]
    EmptyCart,

    #[error("Checkout is already in progress")]
    AlreadyInFlight,

    #[error(transparent)]
    Client(#[from] CheckoutClientError),
}
