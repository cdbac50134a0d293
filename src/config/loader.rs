//! Configuration loading from disk.

use std::env;
use std::fs;
use std::path::Path;

use crate::config::schema::WorkerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming an optional TOML config file.
pub const CONFIG_ENV: &str = "BODA_WORKER_CONFIG";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<WorkerConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: WorkerConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load the file named by [`CONFIG_ENV`], or fall back to defaults when unset.
pub fn load_from_env() -> Result<WorkerConfig, ConfigError> {
    match env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => load_config(Path::new(&path)),
        _ => Ok(WorkerConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_valid_file() {
        let file = write_config("[worker]\ninterval_secs = 2\n");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.worker.interval_secs, 2);
    }

    #[test]
    fn rejects_zero_interval() {
        let file = write_config("[worker]\ninterval_secs = 0\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("interval_secs"));
    }

    #[test]
    fn rejects_malformed_toml() {
        let file = write_config("[worker\n");
        assert!(matches!(load_config(file.path()), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
