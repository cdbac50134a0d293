//! Human-readable output streams.
//!
//! Every line is flushed as soon as it is written so a process manager
//! capturing a pipe sees it immediately.

use std::fmt::Display;
use std::io::{self, Write};

use chrono::Local;

/// `strftime` pattern used for every timestamp the worker prints.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time formatted with [`TIMESTAMP_FORMAT`].
pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Output and error writers for the worker.
pub struct Console {
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
}

impl Console {
    pub fn new(out: impl Write + Send + 'static, err: impl Write + Send + 'static) -> Self {
        Self {
            out: Box::new(out),
            err: Box::new(err),
        }
    }

    /// Console bound to the process stdout/stderr.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }

    /// Write one line to the output stream.
    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }

    /// Write one line to the error stream.
    pub fn error_line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.err, "{}", text)?;
        self.err.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn timestamp_round_trips_through_format() {
        let ts = timestamp();
        assert_eq!(ts.len(), 19);
        assert!(NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok());
    }
}
