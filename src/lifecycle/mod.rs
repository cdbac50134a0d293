//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Install signals → Print banner → Run status loop → Map exit status
//!
//! Shutdown (shutdown.rs):
//!     Trigger received → Loop returns before its next line → Exit 0
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Signals preempt the sleep; they never wait out the interval
//! - A fault exits 1 immediately, with no retry

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::{Shutdown, ShutdownListener};
pub use signals::Signal;
