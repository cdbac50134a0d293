//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (interval > 0, known log level)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: WorkerConfig → Result<(), Vec<ValidationError>>

use std::fmt;

use crate::config::schema::WorkerConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    ZeroInterval,
    UnknownLogLevel(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::ZeroInterval => write!(f, "worker.interval_secs must be greater than 0"),
            ValidationError::UnknownLogLevel(level) => {
                write!(f, "observability.log_level '{}' is not one of {}", level, LOG_LEVELS.join(", "))
            }
        }
    }
}

/// Check a config for values serde cannot reject on its own.
pub fn validate_config(config: &WorkerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.worker.interval_secs == 0 {
        errors.push(ValidationError::ZeroInterval);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(config.observability.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
