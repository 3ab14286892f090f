//! Checkout Errors

use herbarium_app::checkout::CheckoutServiceError;
use salvo::http::StatusError;
use tracing::{error, warn};

use crate::observability::CheckoutOutcome;

/// Map a checkout failure to its HTTP error and metric outcome.
pub(crate) fn into_status_error(error: CheckoutServiceError) -> (StatusError, CheckoutOutcome) {
    let brief = error.to_string();

    match error {
        CheckoutServiceError::EmptyCart => (
            StatusError::bad_request().brief(brief),
            CheckoutOutcome::Rejected,
        ),
        CheckoutServiceError::InvalidItem(product_id) => {
            warn!(%product_id, "checkout rejected an invalid cart line");

            (
                StatusError::bad_request().brief("Invalid cart item"),
                CheckoutOutcome::Rejected,
            )
        }
        CheckoutServiceError::NotConfigured => (
            StatusError::internal_server_error().brief(brief),
            CheckoutOutcome::NotConfigured,
        ),
        CheckoutServiceError::Gateway(source) => {
            error!("failed to create checkout session: {source}");

            (
                StatusError::bad_gateway().brief(brief),
                CheckoutOutcome::GatewayError,
            )
        }
    }
}
