//! Shutdown coordination for the worker.

use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};

use crate::lifecycle::signals::Signal;

/// Coordinator for graceful shutdown.
///
/// Provides a broadcast channel that long-running tasks subscribe to. The
/// payload is the signal that requested the shutdown.
#[derive(Clone)]
pub struct Shutdown {
    /// Broadcast channel sender.
    tx: broadcast::Sender<Signal>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    ///
    /// Only triggers sent after subscribing are observed.
    pub fn subscribe(&self) -> ShutdownListener {
        ShutdownListener {
            rx: self.tx.subscribe(),
        }
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self, signal: Signal) {
        let _ = self.tx.send(signal);
    }

    /// Get the number of active subscribers (tasks still running).
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving half handed to the status loop.
pub struct ShutdownListener {
    rx: broadcast::Receiver<Signal>,
}

impl ShutdownListener {
    /// Wait for a trigger. `None` once every [`Shutdown`] handle is dropped,
    /// since no trigger can arrive after that.
    pub async fn recv(&mut self) -> Option<Signal> {
        loop {
            match self.rx.recv().await {
                Ok(signal) => return Some(signal),
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Non-blocking check for a pending trigger.
    pub fn try_recv(&mut self) -> Option<Signal> {
        loop {
            match self.rx.try_recv() {
                Ok(signal) => return Some(signal),
                Err(TryRecvError::Lagged(_)) => continue,
                Err(TryRecvError::Empty | TryRecvError::Closed) => return None,
            }
        }
    }
}
