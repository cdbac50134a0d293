//! Per-iteration hook.

use crate::worker::types::WorkerResult;

/// Work performed once per loop iteration, after the status line is printed.
///
/// An `Err` ends the loop; it is not retried.
pub trait Iteration {
    fn run(&mut self, iteration: u64) -> WorkerResult<()>;
}

/// Hook that does nothing. The worker only reports liveness.
#[derive(Debug, Default, Clone, Copy)]
pub struct Idle;

impl Iteration for Idle {
    fn run(&mut self, _iteration: u64) -> WorkerResult<()> {
        Ok(())
    }
}
