//! App Router

use salvo::Router;

use crate::{booking, checkout, healthcheck, observability, practitioners, products};

/// Routes served by the API, without state injection or documentation.
pub fn app_router() -> Router {
    Router::new()
        .hoop(observability::request_logging)
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(
            Router::with_path("practitioners")
                .get(practitioners::index::handler)
                .push(Router::with_path("{practitioner}").get(practitioners::get::handler)),
        )
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{product}").get(products::get::handler)),
        )
        .push(Router::with_path("availability").get(booking::availability::handler))
        .push(Router::with_path("booking/dates").get(booking::dates::handler))
        .push(Router::with_path("api/checkout").post(checkout::create::handler))
}
