//! The liveness loop.

use std::time::Duration;

use tokio::time::sleep;

use crate::lifecycle::shutdown::ShutdownListener;
use crate::lifecycle::signals::Signal;
use crate::worker::console::{timestamp, Console};
use crate::worker::iteration::Iteration;
use crate::worker::types::WorkerResult;

/// Prints a status line, runs the hook, then sleeps, until shut down.
pub struct StatusLoop<I> {
    interval: Duration,
    iteration: I,
    counter: u64,
}

impl<I: Iteration> StatusLoop<I> {
    pub fn new(interval: Duration, iteration: I) -> Self {
        Self {
            interval,
            iteration,
            counter: 0,
        }
    }

    /// Number of status lines printed so far.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Run until a shutdown trigger arrives or an iteration faults.
    ///
    /// Returns the signal that ended the loop. A pending trigger is honored
    /// before the next status line is printed, and preempts the sleep.
    pub async fn run(
        &mut self,
        console: &mut Console,
        shutdown: &mut ShutdownListener,
    ) -> WorkerResult<Signal> {
        tracing::info!(interval_secs = self.interval.as_secs_f64(), "Status loop started");

        loop {
            if let Some(signal) = shutdown.try_recv() {
                return Ok(signal);
            }

            self.counter += 1;
            console.line(format_args!(
                "[{}] Worker running... (iteration {})",
                timestamp(),
                self.counter
            ))?;

            self.iteration.run(self.counter)?;
            tracing::debug!(iteration = self.counter, "Iteration complete");

            tokio::select! {
                biased;
                Some(signal) = shutdown.recv() => return Ok(signal),
                _ = sleep(self.interval) => {}
            }
        }
    }
}
