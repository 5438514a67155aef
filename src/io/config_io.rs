use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::io::recovery::{self, RecoveryCategory, RecoveryEntry};
use crate::model::config::AppConfig;

/// Optional configuration file, relative to the working directory
pub const CONFIG_FILE: &str = "recicla.toml";

/// Error type for config I/O operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Read the config file. A missing file means all defaults.
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read the config file, falling back to defaults on any error. The error
/// is recorded in the recovery log under `log_dir`.
pub fn load_config(path: &Path, log_dir: &Path) -> AppConfig {
    match read_config(path) {
        Ok(config) => config,
        Err(e) => {
            recovery::log_recovery(
                log_dir,
                RecoveryEntry::now(RecoveryCategory::Config, "config ignored")
                    .field("Error", e.to_string()),
            );
            AppConfig::default()
        }
    }
}
