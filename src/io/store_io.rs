use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::io::recovery::{self, RecoveryCategory, RecoveryEntry};
use crate::model::store::{CapacityLimits, Store};
use crate::parse::{parse_store, serialize_store};

/// Data file, relative to the working directory
pub const DATA_FILE: &str = "recicla.txt";

/// The data file could not be read or written
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Directory holding the data file (and its recovery log)
pub fn data_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

/// Read the data file into a fresh store.
///
/// A missing file is the normal first-run state and yields an empty store.
/// Lines that are not records are dropped and reported to the recovery log.
pub fn read_store(path: &Path, limits: CapacityLimits) -> Result<Store, PersistenceError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Store::new(limits)),
        Err(e) => {
            return Err(PersistenceError::ReadError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let (store, dropped) = parse_store(&text, limits);
    if !dropped.is_empty() {
        recovery::log_recovery(
            data_dir(path),
            RecoveryEntry::now(RecoveryCategory::Parser, "dropped lines")
                .field("Source", path.display().to_string())
                .body(dropped.join("\n")),
        );
    }
    Ok(store)
}

/// Load the store, degrading to an empty one when the file is unreadable.
pub fn load_store(path: &Path, limits: CapacityLimits) -> Store {
    match read_store(path, limits) {
        Ok(store) => store,
        Err(e) => {
            recovery::log_recovery(
                data_dir(path),
                RecoveryEntry::now(RecoveryCategory::Read, "data file unreadable")
                    .field("Error", e.to_string()),
            );
            Store::new(limits)
        }
    }
}

/// Overwrite the data file with the full store contents.
///
/// On failure the serialized contents are kept in the recovery log.
pub fn save_store(path: &Path, store: &Store) -> Result<(), PersistenceError> {
    let content = serialize_store(store);
    if let Err(e) = recovery::atomic_write(path, content.as_bytes()) {
        recovery::log_recovery(
            data_dir(path),
            RecoveryEntry::now(RecoveryCategory::Write, "data file write failed")
                .field("Target", path.display().to_string())
                .field("Error", e.to_string())
                .body(content),
        );
        return Err(PersistenceError::WriteError {
            path: path.to_path_buf(),
            source: e,
        });
    }
    Ok(())
}
