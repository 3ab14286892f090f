//! Test helpers.

use std::sync::Arc;

use herbarium::catalog::{Catalog, CatalogError};
use herbarium_app::{checkout::MockCheckoutService, context::AppContext};
use salvo::{affix_state::inject, prelude::*};

use crate::state::State;

pub(crate) const TEST_SITE_ORIGIN: &str = "https://herbs.example";

pub(crate) fn strict_checkout_mock() -> MockCheckoutService {
    let mut checkout = MockCheckoutService::new();

    checkout.expect_create_session().never();

    checkout
}

pub(crate) fn state_with_checkout(
    checkout: MockCheckoutService,
) -> Result<Arc<State>, CatalogError> {
    let app = AppContext::new(Arc::new(Catalog::bundled()?), Arc::new(checkout));

    Ok(State::from_app_context(app, TEST_SITE_ORIGIN))
}

pub(crate) fn bundled_service(
    checkout: MockCheckoutService,
    route: Router,
) -> Result<Service, CatalogError> {
    Ok(Service::new(
        Router::new()
            .hoop(inject(state_with_checkout(checkout)?))
            .push(route),
    ))
}
