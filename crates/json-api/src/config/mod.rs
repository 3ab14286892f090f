//! Server configuration module

use clap::Parser;

use crate::config::{
    checkout::CheckoutConfig, observability::LoggingConfig, server::ServerRuntimeConfig,
};

pub(crate) mod checkout;
pub(crate) mod observability;
pub(crate) mod server;

/// Herbarium JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "herbarium-json", about = "Herbarium JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Payment processor settings.
    #[command(flatten)]
    pub checkout: CheckoutConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::config::observability::LogFormat;

    #[test]
    fn flags_override_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "herbarium-json",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--log-format",
            "json",
            "--site-origin",
            "https://herbs.example",
            "--stripe-secret-key",
            "sk_test_123",
        ])?;

        assert_eq!(config.socket_addr(), "127.0.0.1:9000");
        assert_eq!(config.logging.log_format, LogFormat::Json);
        assert_eq!(config.server.site_origin, "https://herbs.example");

        let stripe = config.checkout.stripe().ok_or("stripe should be configured")?;

        assert_eq!(stripe.secret_key.expose(), "sk_test_123");

        Ok(())
    }

    #[test]
    fn blank_secret_key_disables_stripe() -> TestResult {
        let config =
            ServerConfig::try_parse_from(["herbarium-json", "--stripe-secret-key", "  "])?;

        assert!(config.checkout.stripe().is_none());

        Ok(())
    }
}
