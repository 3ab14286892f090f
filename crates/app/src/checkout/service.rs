//! Checkout service.

use async_trait::async_trait;
use mockall::automock;
use tracing::warn;

use crate::checkout::{CheckoutOrder, CheckoutServiceError, CheckoutSession};

/// Check an order before it is sent anywhere.
///
/// # Errors
///
/// Returns [`CheckoutServiceError::EmptyCart`] for an order without lines and
/// [`CheckoutServiceError::InvalidItem`] for a line with no quantity or a negative price.
pub fn validate_order(order: &CheckoutOrder) -> Result<(), CheckoutServiceError> {
    if order.items.is_empty() {
        return Err(CheckoutServiceError::EmptyCart);
    }

    if let Some(item) = order
        .items
        .iter()
        .find(|item| item.quantity == 0 || (item.price.is_sign_negative() && !item.price.is_zero()))
    {
        return Err(CheckoutServiceError::InvalidItem(item.product_id.clone()));
    }

    Ok(())
}

/// [`CheckoutService`] used when no payment processor is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredCheckoutService;

#[async_trait]
impl CheckoutService for UnconfiguredCheckoutService {
    async fn create_session(
        &self,
        _order: CheckoutOrder,
    ) -> Result<CheckoutSession, CheckoutServiceError> {
        warn!("checkout attempted without a payment processor configured");

        Err(CheckoutServiceError::NotConfigured)
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Turn an order into a hosted payment session.
    async fn create_session(
        &self,
        order: CheckoutOrder,
    ) -> Result<CheckoutSession, CheckoutServiceError>;
}
