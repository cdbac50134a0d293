//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Keep diagnostics off stdout, which carries the status lines
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` wins over the configured level
//! - Default level is `warn`, so a plain run prints nothing extra

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Build the filter from `RUST_LOG`, else from the configured level.
pub fn filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "boda_worker={}",
            config.log_level.to_ascii_lowercase()
        ))
    })
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(config: &ObservabilityConfig) {
    let _ = tracing_subscriber::registry()
        .with(filter(config))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
