//! Process-wide `tracing` subscriber

use dealboard_domain::{DealboardError, LoggingConfig, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// `logging.level`. With `logging.json` the output is one JSON object per
/// line.
///
/// # Errors
///
/// Returns `DealboardError::Config` if a global subscriber is already
/// installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(&config.level);

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if config.json {
        registry.with(fmt::layer().json().with_current_span(false)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };

    installed.map_err(|err| DealboardError::Config(format!("failed to install tracing: {err}")))
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
