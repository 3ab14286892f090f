//! Create Checkout Session Handler

use herbarium_app::checkout::CheckoutOrder;
use salvo::{
    oapi::extract::{HeaderParam, JsonBody},
    prelude::*,
};
use tracing::info;

use crate::{
    checkout::{CheckoutRequestBody, CheckoutResponseBody, into_status_error},
    extensions::*,
    observability::{CheckoutOutcome, observe_checkout},
};

/// Create Checkout Session Handler
///
/// Turns the posted cart lines into a hosted payment session and returns its URL. Payment
/// redirects go back to the request's `Origin`, or the configured site origin without one.
#[endpoint(tags("checkout"), summary = "Create Checkout Session")]
pub(crate) async fn handler(
    body: JsonBody<CheckoutRequestBody>,
    origin: HeaderParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<CheckoutResponseBody>, StatusError> {
    let state = depot.state_or_500()?;

    let origin = origin
        .into_inner()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty() && value != "null")
        .unwrap_or_else(|| state.site_origin.clone());

    let order = CheckoutOrder {
        items: body.into_inner().items.into_iter().map(Into::into).collect(),
        origin,
    };

    let lines = order.items.len();

    match state.checkout().create_session(order).await {
        Ok(session) => {
            info!(session_id = %session.id, lines, "checkout session created");
            observe_checkout(CheckoutOutcome::Created);

            Ok(Json(CheckoutResponseBody { url: session.url }))
        }
        Err(error) => {
            let (status, outcome) = into_status_error(error);
            observe_checkout(outcome);

            Err(status)
        }
    }
}
