//! Checkout Config

use clap::Args;
use herbarium_app::checkout::{StripeConfig, StripeSecretKey, stripe::DEFAULT_STRIPE_API_BASE};

/// Payment processor settings.
#[derive(Debug, Args)]
pub struct CheckoutConfig {
    /// Stripe secret key; checkout is refused when unset
    #[arg(long, env = "STRIPE_SECRET_KEY", hide_env_values = true, hide = true)]
    pub stripe_secret_key: Option<String>,

    /// Stripe API address
    #[arg(long, env = "STRIPE_API_BASE", default_value = DEFAULT_STRIPE_API_BASE)]
    pub stripe_api_base: String,
}

impl CheckoutConfig {
    /// Stripe connection settings, if a non-blank secret key was supplied.
    pub fn stripe(&self) -> Option<StripeConfig> {
        self.stripe_secret_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(|key| StripeConfig {
                secret_key: StripeSecretKey::new(key),
                api_base: self.stripe_api_base.clone(),
            })
    }
}
