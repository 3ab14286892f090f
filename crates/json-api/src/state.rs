//! State

use std::sync::Arc;

use herbarium::catalog::Catalog;
use herbarium_app::{checkout::CheckoutService, context::AppContext};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Redirect origin used when a checkout request carries no `Origin` header
    pub(crate) site_origin: String,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, site_origin: impl Into<String>) -> Self {
        Self {
            app,
            site_origin: site_origin.into(),
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, site_origin: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::new(app, site_origin))
    }

    pub(crate) fn catalog(&self) -> &Catalog {
        &self.app.catalog
    }

    pub(crate) fn checkout(&self) -> &dyn CheckoutService {
        self.app.checkout.as_ref()
    }
}
