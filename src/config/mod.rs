//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! $BODA_WORKER_CONFIG (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → WorkerConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; there is no reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::LoopConfig;
pub use schema::ObservabilityConfig;
pub use schema::WorkerConfig;
