//! App Context

use std::sync::Arc;

use herbarium::catalog::{Catalog, CatalogError};
use thiserror::Error;
use tracing::{info, warn};

use crate::checkout::{
    CheckoutService, StripeCheckoutService, StripeConfig, UnconfiguredCheckoutService,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to load catalog")]
    Catalog(#[source] CatalogError),
}

#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<Catalog>,
    pub checkout: Arc<dyn CheckoutService>,
}

impl AppContext {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, checkout: Arc<dyn CheckoutService>) -> Self {
        Self { catalog, checkout }
    }

    /// Build application context from the bundled catalog.
    ///
    /// Without Stripe configuration every checkout attempt is refused.
    ///
    /// # Errors
    ///
    /// Returns an error when the bundled catalog fails to load.
    pub fn bundled(stripe: Option<StripeConfig>) -> Result<Self, AppInitError> {
        let catalog = Catalog::bundled().map_err(AppInitError::Catalog)?;

        let checkout: Arc<dyn CheckoutService> = match stripe {
            Some(config) => {
                info!(api_base = %config.api_base, "stripe checkout enabled");

                Arc::new(StripeCheckoutService::new(config))
            }
            None => {
                warn!("STRIPE_SECRET_KEY is not set, checkout is disabled");

                Arc::new(UnconfiguredCheckoutService)
            }
        };

        Ok(Self::new(Arc::new(catalog), checkout))
    }
}
