//! Shared utilities for integration testing.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use boda_worker::worker::{Iteration, WorkerError, WorkerResult};
use boda_worker::{Console, Shutdown, Signal};

/// In-memory writer whose contents stay readable after it is moved into a Console.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer that always fails, like a closed pipe.
#[allow(dead_code)]
pub struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Console backed by two shared buffers, returned alongside it.
#[allow(dead_code)]
pub fn capture() -> (Console, SharedBuffer, SharedBuffer) {
    let out = SharedBuffer::default();
    let err = SharedBuffer::default();
    (Console::new(out.clone(), err.clone()), out, err)
}

/// Hook that triggers a shutdown once the given iteration has run.
#[allow(dead_code)]
pub struct StopAt {
    pub at: u64,
    pub signal: Signal,
    pub shutdown: Shutdown,
}

impl Iteration for StopAt {
    fn run(&mut self, iteration: u64) -> WorkerResult<()> {
        if iteration == self.at {
            self.shutdown.trigger(self.signal);
        }
        Ok(())
    }
}

/// Hook that fails on the given iteration.
#[allow(dead_code)]
pub struct FailAt(pub u64);

impl Iteration for FailAt {
    fn run(&mut self, iteration: u64) -> WorkerResult<()> {
        if iteration == self.0 {
            return Err(WorkerError::iteration(iteration, "injected fault"));
        }
        Ok(())
    }
}

/// Status line counters, in order.
#[allow(dead_code)]
pub fn iteration_numbers(lines: &[String]) -> Vec<u64> {
    lines
        .iter()
        .filter_map(|line| {
            let rest = line.split("(iteration ").nth(1)?;
            rest.trim_end_matches(')').parse().ok()
        })
        .collect()
}
