//! Checkout
//!
//! Server side: [`CheckoutService`] turns cart lines into a hosted payment session. Client side:
//! [`CheckoutClient`] talks to the checkout endpoint and [`CheckoutFlow`] drives it from a cart.

mod client;
mod errors;
mod flow;
mod models;
mod service;
pub mod stripe;

pub use client::{
    CheckoutClient, GENERIC_CHECKOUT_ERROR, HttpCheckoutClient, MockCheckoutClient, error_message,
};
pub use errors::*;
pub use flow::CheckoutFlow;
pub use models::*;
pub use service::*;
pub use stripe::{StripeCheckoutService, StripeConfig, StripeError, StripeSecretKey};
