//! OS signal handling.
//!
//! # Responsibilities
//! - Register SIGINT and SIGTERM listeners before any work starts
//! - Translate the first signal received into a shutdown trigger
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Registration is synchronous so no signal can hit the default
//!   disposition between startup and the first status line
//! - Non-Unix targets only see Ctrl+C

use std::fmt;

use tokio::task::JoinHandle;

use crate::lifecycle::shutdown::Shutdown;
use crate::worker::WorkerError;

/// A termination request the worker recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// SIGINT, including Ctrl+C at a terminal.
    Interrupt,
    /// SIGTERM, as sent by a process manager.
    Terminate,
}

impl Signal {
    pub fn name(self) -> &'static str {
        match self {
            Signal::Interrupt => "SIGINT",
            Signal::Terminate => "SIGTERM",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Registered listeners for the termination signals.
#[cfg(unix)]
pub struct SignalListener {
    interrupt: tokio::signal::unix::Signal,
    terminate: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl SignalListener {
    /// Register SIGINT and SIGTERM. Must be called inside a Tokio runtime.
    pub fn install() -> Result<Self, WorkerError> {
        use tokio::signal::unix::{signal, SignalKind};

        let interrupt = signal(SignalKind::interrupt()).map_err(WorkerError::Signal)?;
        let terminate = signal(SignalKind::terminate()).map_err(WorkerError::Signal)?;
        tracing::debug!("Signal listeners installed for SIGINT and SIGTERM");

        Ok(Self {
            interrupt,
            terminate,
        })
    }

    /// Wait for the next signal. `None` once both streams are closed.
    pub async fn recv(&mut self) -> Option<Signal> {
        tokio::select! {
            Some(()) = self.interrupt.recv() => Some(Signal::Interrupt),
            Some(()) = self.terminate.recv() => Some(Signal::Terminate),
            else => None,
        }
    }
}

#[cfg(not(unix))]
pub struct SignalListener;

#[cfg(not(unix))]
impl SignalListener {
    pub fn install() -> Result<Self, WorkerError> {
        Ok(Self)
    }

    pub async fn recv(&mut self) -> Option<Signal> {
        tokio::signal::ctrl_c().await.ok().map(|()| Signal::Interrupt)
    }
}

/// Forward the first received signal into `shutdown`.
pub fn spawn_forwarder(mut listener: SignalListener, shutdown: Shutdown) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Some(signal) = listener.recv().await {
            tracing::info!(signal = %signal, "Shutdown signal received");
            shutdown.trigger(signal);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_names() {
        assert_eq!(Signal::Interrupt.to_string(), "SIGINT");
        assert_eq!(Signal::Terminate.to_string(), "SIGTERM");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn install_inside_runtime() {
        assert!(SignalListener::install().is_ok());
    }
}
