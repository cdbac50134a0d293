//! boda-worker
//!
//! A liveness worker meant to run under a process manager. It prints a
//! diagnostic banner, then a timestamped status line every interval until
//! SIGINT/SIGTERM (exit 0) or an unhandled fault (exit 1).
//!
//! # Architecture Overview
//!
//! ```text
//!   config ──▶ observability ──▶ lifecycle::startup
//!                                   │
//!                                   ├─ signals ──▶ shutdown ──┐
//!                                   │                         ▼
//!                                   └─ worker::diagnostics ─▶ worker::status_loop
//!                                                               │
//!                                                               ▼
//!                                                      exit status 0 / 1
//! ```

use std::process::ExitCode;

use boda_worker::config::loader::load_from_env;
use boda_worker::lifecycle::startup::{self, EXIT_FAULT};
use boda_worker::observability::logging;
use boda_worker::worker::{Console, Idle};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match load_from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::from(EXIT_FAULT);
        }
    };

    logging::init(&config.observability);

    tracing::info!(
        interval_secs = config.worker.interval_secs,
        log_level = %config.observability.log_level,
        "Configuration loaded"
    );

    ExitCode::from(startup::run(&config, Idle, Console::stdio()).await)
}
