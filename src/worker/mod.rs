//! Worker subsystem.
//!
//! # Data Flow
//! ```text
//! diagnostics.rs → banner on stdout (once)
//!
//! status_loop.rs, forever:
//!     counter += 1 → status line (console.rs) → Iteration hook → sleep
//!         ↑ shutdown trigger preempts the sleep
//!         ↑ hook or write fault ends the loop with WorkerError
//! ```

pub mod console;
pub mod diagnostics;
pub mod iteration;
pub mod status_loop;
pub mod types;

pub use console::Console;
pub use diagnostics::Diagnostics;
pub use iteration::{Idle, Iteration};
pub use status_loop::StatusLoop;
pub use types::{WorkerError, WorkerResult};
