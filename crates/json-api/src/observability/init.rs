//! Observability start-up.

use tracing::debug;

use crate::config::ServerConfig;

use super::{ObservabilityError, logging, metrics, settings};

/// Install the tracing subscriber, apply runtime thresholds and register metrics.
pub(crate) fn init(config: &ServerConfig) -> Result<(), ObservabilityError> {
    settings::apply_runtime_config(config);

    logging::init_subscriber(config)?;

    if !metrics::is_registered() {
        return Err(ObservabilityError::Metrics);
    }

    debug!(
        slow_request_threshold_ms = config.logging.slow_request_threshold_ms,
        "observability initialised"
    );

    Ok(())
}
