//! Database snapshot files for the offline runner.
//!
//! A snapshot is a single JSON document with `globals`, `locations`, `items`
//! and `coreConfig` keys, in the server's own field naming.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::InMemoryHost;

/// Error type for snapshot file operations.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing snapshot at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot is not valid JSON or does not match the table shapes.
    #[error("failed to parse snapshot at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The tables could not be serialized.
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Reads a snapshot into an [`InMemoryHost`].
///
/// # Errors
///
/// Returns [`SnapshotError::Io`] if the file cannot be read and
/// [`SnapshotError::Parse`] if its content is malformed.
pub fn load_snapshot(path: &Path) -> Result<InMemoryHost, SnapshotError> {
    let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| SnapshotError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `host` to `path` as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`SnapshotError::Serialize`] or [`SnapshotError::Io`].
pub fn save_snapshot(host: &InMemoryHost, path: &Path) -> Result<(), SnapshotError> {
    let content = serde_json::to_string_pretty(host).map_err(SnapshotError::Serialize)?;
    std::fs::write(path, content).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })
}
