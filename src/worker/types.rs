//! Worker error definitions.

use thiserror::Error;

/// Faults that end the status loop with a non-zero exit.
#[derive(Debug, Error)]
pub enum WorkerError {
    /// Writing to stdout or stderr failed.
    #[error("console write failed: {0}")]
    Io(#[from] std::io::Error),

    /// The per-iteration hook reported a failure.
    #[error("iteration {iteration} failed: {message}")]
    Iteration { iteration: u64, message: String },

    /// SIGINT/SIGTERM listeners could not be registered.
    #[error("failed to install signal handlers: {0}")]
    Signal(#[source] std::io::Error),
}

impl WorkerError {
    pub fn iteration(iteration: u64, message: impl Into<String>) -> Self {
        Self::Iteration {
            iteration,
            message: message.into(),
        }
    }
}

/// Result type for worker operations.
pub type WorkerResult<T> = Result<T, WorkerError>;
