//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! lifecycle + worker produce:
//!     → logging.rs (structured log events, stderr)
//!
//! The human-readable banner and status lines are not log events;
//! they go through worker::console on stdout.
//! ```

pub mod logging;
