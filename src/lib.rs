//! Liveness worker library.

pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod worker;

pub use config::WorkerConfig;
pub use lifecycle::{Shutdown, Signal};
pub use worker::{Console, Iteration, StatusLoop, WorkerError};
