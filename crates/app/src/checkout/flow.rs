//! Client-side checkout flow.
//!
//! Sends the cart to the checkout endpoint, clears it once a payment page URL comes back and keeps
//! a dismissible message when it does not.

use std::sync::{
    Mutex, PoisonError,
    atomic::{AtomicBool, Ordering},
};

use herbarium::cart::{CartStorage, CartStore};
use tracing::{info, warn};

use crate::checkout::{CheckoutClient, CheckoutFlowError};

/// Checkout button state: whether a request is in flight and the last failure.
#[derive(Debug, Default)]
pub struct CheckoutFlow {
    in_flight: AtomicBool,
    error: Mutex<Option<String>>,
}

/// Releases the in-flight flag when dropped, including when the request future is dropped.
#[derive(Debug)]
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_previous| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl CheckoutFlow {
    /// A flow with nothing in flight and no error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a checkout request is outstanding; the checkout control should be disabled.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Message from the last failed attempt.
    pub fn error(&self) -> Option<String> {
        self.error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Hide the last failure message.
    pub fn dismiss_error(&self) {
        self.set_error(None);
    }

    /// Send the cart to checkout.
    ///
    /// On success the cart is cleared and the payment page URL returned. On failure the cart is
    /// left alone and the message is kept for [`Self::error`]. Nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty cart, while another attempt is in flight, or when the
    /// endpoint fails.
    pub async fn proceed<S: CartStorage>(
        &self,
        cart: &mut CartStore<S>,
        client: &dyn CheckoutClient,
    ) -> Result<String, CheckoutFlowError> {
        if cart.is_empty() {
            return Err(CheckoutFlowError::EmptyCart);
        }

        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            return Err(CheckoutFlowError::AlreadyInFlight);
        };

        self.set_error(None);

        match client.start_checkout(cart.items()).await {
            Ok(url) => {
                info!(lines = cart.len(), "checkout started, clearing cart");

                cart.clear_cart();

                Ok(url)
            }
            Err(err) => {
                warn!(error = %err, "checkout failed");

                self.set_error(Some(err.to_string()));

                Err(err.into())
            }
        }
    }

    fn set_error(&self, message: Option<String>) {
        *self.error.lock().unwrap_or_else(PoisonError::into_inner) = message;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use herbarium::cart::{CartLineItem, MemoryStorage, NewLineItem};
    use rust_decimal::Decimal;
    use testresult::TestResult;
    use tokio::sync::Notify;

    use super::*;
    use crate::checkout::{CheckoutClientError, MockCheckoutClient};

    fn cart_with_item() -> CartStore<MemoryStorage> {
        let mut cart = CartStore::load(MemoryStorage::new());

        cart.add_item(NewLineItem {
            product_id: "chamomile-sleep-tea".to_string(),
            name: "Chamomile Sleep Tea".to_string(),
            price: Decimal::new(850, 2),
            image: String::new(),
        });

        cart
    }

    /// Client that waits until released before answering.
    struct GatedClient {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl CheckoutClient for GatedClient {
        async fn start_checkout(
            &self,
            _items: &[CartLineItem],
        ) -> Result<String, CheckoutClientError> {
            self.gate.notified().await;

            Ok("https://pay.example/session".to_string())
        }
    }

    #[tokio::test]
    async fn success_clears_cart_and_returns_url() -> TestResult {
        let mut client = MockCheckoutClient::new();

        client
            .expect_start_checkout()
            .withf(|items| items.len() == 1)
            .times(1)
            .returning(|_| Ok("https://pay.example/session".to_string()));

        let flow = CheckoutFlow::new();
        let mut cart = cart_with_item();

        let url = flow.proceed(&mut cart, &client).await?;

        assert_eq!(url, "https://pay.example/session");
        assert!(cart.is_empty());
        assert!(!flow.is_in_flight());
        assert_eq!(flow.error(), None);

        Ok(())
    }

    #[tokio::test]
    async fn failure_keeps_cart_and_records_message() {
        let mut client = MockCheckoutClient::new();

        client.expect_start_checkout().returning(|_| {
            Err(CheckoutClientError::Rejected {
                status: 500,
                message: "Stripe is not configured.".to_string(),
            })
        });

        let flow = CheckoutFlow::new();
        let mut cart = cart_with_item();

        let result = flow.proceed(&mut cart, &client).await;

        assert!(matches!(result, Err(CheckoutFlowError::Client(_))));
        assert_eq!(cart.total_items(), 1);
        assert_eq!(flow.error().as_deref(), Some("Stripe is not configured."));
        assert!(!flow.is_in_flight());

        flow.dismiss_error();

        assert_eq!(flow.error(), None);
    }

    #[tokio::test]
    async fn empty_cart_is_not_sent() {
        let mut client = MockCheckoutClient::new();

        client.expect_start_checkout().never();

        let flow = CheckoutFlow::new();
        let mut cart = CartStore::load(MemoryStorage::new());

        let result = flow.proceed(&mut cart, &client).await;

        assert!(matches!(result, Err(CheckoutFlowError::EmptyCart)));
    }

    #[tokio::test]
    async fn second_submission_is_rejected_while_in_flight() -> TestResult {
        let gate = Arc::new(Notify::new());
        let client = GatedClient { gate: gate.clone() };
        let flow = CheckoutFlow::new();

        let mut first_cart = cart_with_item();
        let mut second_cart = cart_with_item();

        let url = {
            let first = flow.proceed(&mut first_cart, &client);
            tokio::pin!(first);

            tokio::select! {
                biased;
                _ = &mut first => return Err("first checkout finished before release".into()),
                () = tokio::task::yield_now() => {}
            }

            assert!(flow.is_in_flight());

            let second = flow.proceed(&mut second_cart, &client).await;

            assert!(matches!(second, Err(CheckoutFlowError::AlreadyInFlight)));

            gate.notify_one();

            first.await?
        };

        assert_eq!(url, "https://pay.example/session");
        assert!(!flow.is_in_flight());
        assert!(first_cart.is_empty());
        assert_eq!(second_cart.total_items(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn dropping_request_releases_guard() {
        let gate = Arc::new(Notify::new());
        let client = GatedClient { gate };
        let flow = CheckoutFlow::new();
        let mut cart = cart_with_item();

        {
            let pending = flow.proceed(&mut cart, &client);
            tokio::pin!(pending);

            tokio::select! {
                biased;
                _ = &mut pending => {}
                () = tokio::task::yield_now() => {}
            }

            assert!(flow.is_in_flight());
        }

        assert!(!flow.is_in_flight());
        assert_eq!(cart.total_items(), 1);
    }
}
