//! Startup banner.

use std::env;
use std::io;
use std::path::Path;

use crate::worker::console::Console;

/// Environment variable shown as the active virtual environment.
pub const VIRTUAL_ENV: &str = "VIRTUAL_ENV";

const RULE_WIDTH: usize = 60;
const UNKNOWN: &str = "unknown";

/// Process facts printed once before the loop starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    pub version: String,
    pub executable: String,
    pub virtual_env: Option<String>,
    pub working_dir: String,
    pub pid: u32,
}

impl Diagnostics {
    /// Gather diagnostics from the running process. Never fails.
    pub fn collect() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            executable: display_path(env::current_exe().ok().as_deref()),
            virtual_env: env::var(VIRTUAL_ENV).ok().filter(|v| !v.is_empty()),
            working_dir: display_path(env::current_dir().ok().as_deref()),
            pid: std::process::id(),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let rule = "=".repeat(RULE_WIDTH);
        vec![
            rule.clone(),
            "Worker started successfully".to_string(),
            rule.clone(),
            format!("Version: {}", self.version),
            format!("Executable: {}", self.executable),
            format!(
                "Virtual environment: {}",
                self.virtual_env.as_deref().unwrap_or("not set")
            ),
            format!("Working directory: {}", self.working_dir),
            format!("Process ID: {}", self.pid),
            rule,
        ]
    }

    pub fn print(&self, console: &mut Console) -> io::Result<()> {
        for line in self.lines() {
            console.line(line)?;
        }
        Ok(())
    }
}

fn display_path(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Diagnostics {
        Diagnostics {
            version: "0.1.0".into(),
            executable: "/srv/boda/boda-worker".into(),
            virtual_env: None,
            working_dir: "/srv/boda".into(),
            pid: 4242,
        }
    }

    #[test]
    fn banner_layout() {
        let lines = sample().lines();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "=".repeat(60));
        assert_eq!(lines[1], "Worker started successfully");
        assert_eq!(lines[5], "Virtual environment: not set");
        assert_eq!(lines[7], "Process ID: 4242");
        assert_eq!(lines[8], lines[0]);
    }

    #[test]
    fn banner_shows_virtual_env() {
        let mut diagnostics = sample();
        diagnostics.virtual_env = Some("/srv/boda/.venv".into());
        assert!(diagnostics
            .lines()
            .contains(&"Virtual environment: /srv/boda/.venv".to_string()));
    }

    #[test]
    fn collect_reports_this_process() {
        let diagnostics = Diagnostics::collect();
        assert_eq!(diagnostics.pid, std::process::id());
        assert_eq!(diagnostics.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn missing_path_is_unknown() {
        assert_eq!(display_path(None), "unknown");
    }
}
