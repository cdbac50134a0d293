//! Startup orchestration and exit mapping.
//!
//! # Responsibilities
//! - Install signal listeners before anything is printed
//! - Print the banner, then hand control to the status loop
//! - Map the loop outcome to a notice and an exit status
//!
//! # Design Decisions
//! - Fail fast: a fault is reported once and never retried
//! - Nothing runs after the outcome is decided except the final notice

use crate::config::WorkerConfig;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals::{spawn_forwarder, Signal, SignalListener};
use crate::worker::console::{timestamp, Console};
use crate::worker::{Diagnostics, Iteration, StatusLoop, WorkerResult};

/// Exit status after a graceful shutdown.
pub const EXIT_OK: u8 = 0;

/// Exit status after an unhandled fault.
pub const EXIT_FAULT: u8 = 1;

/// Run the worker until a signal or fault, returning the process exit status.
pub async fn run<I: Iteration>(config: &WorkerConfig, iteration: I, mut console: Console) -> u8 {
    let outcome = serve(config, iteration, &mut console).await;
    finish(outcome, &mut console)
}

async fn serve<I: Iteration>(
    config: &WorkerConfig,
    iteration: I,
    console: &mut Console,
) -> WorkerResult<Signal> {
    let shutdown = Shutdown::new();
    let mut listener = shutdown.subscribe();
    let _forwarder = spawn_forwarder(SignalListener::install()?, shutdown.clone());

    Diagnostics::collect().print(console)?;

    let mut status = StatusLoop::new(config.worker.interval(), iteration);
    let outcome = status.run(console, &mut listener).await;
    tracing::info!(iterations = status.counter(), "Status loop stopped");
    outcome
}

/// Print the shutdown notice or fault line and pick the exit status.
pub fn finish(outcome: WorkerResult<Signal>, console: &mut Console) -> u8 {
    match outcome {
        Ok(signal) => {
            let notice = match signal {
                Signal::Interrupt => "Received keyboard interrupt, exiting...".to_string(),
                Signal::Terminate => format!("Received stop signal ({}), exiting...", signal),
            };
            // Blank line first so the notice never shares a line with `^C`.
            let _ = console.line("");
            let _ = console.line(format_args!("[{}] {}", timestamp(), notice));
            EXIT_OK
        }
        Err(e) => {
            tracing::debug!(error = %e, "Worker fault");
            let _ = console.error_line(format_args!("[{}] Error: {}", timestamp(), e));
            EXIT_FAULT
        }
    }
}
