//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML and every field
//! has a default, so an empty file (or no file at all) is a valid config.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the worker.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct WorkerConfig {
    /// Status loop settings.
    pub worker: LoopConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Status loop configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoopConfig {
    /// Sleep between iterations in seconds.
    pub interval_secs: u64,
}

impl LoopConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self { interval_secs: 10 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}
