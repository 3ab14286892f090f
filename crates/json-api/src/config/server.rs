//! Server Config

use clap::Args;
use herbarium_app::checkout::DEFAULT_SITE_ORIGIN;

/// Listener and public address settings.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Server host address
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(short, long, env = "SERVER_PORT", default_value = "8698")]
    pub port: u16,

    /// Public site address payment redirects return to when a request carries no `Origin`
    #[arg(long, env = "SITE_ORIGIN", default_value = DEFAULT_SITE_ORIGIN)]
    pub site_origin: String,
}

impl ServerRuntimeConfig {
    /// Address the listener binds to, e.g. `0.0.0.0:8698`.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
