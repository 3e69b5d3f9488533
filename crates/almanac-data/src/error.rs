//! Error types for the `almanac-data` crate.

use std::path::PathBuf;

/// Errors that can occur while loading the dataset catalog.
///
/// Every variant is fatal: loading happens once at startup, before the
/// server binds its listener, and a failed load must abort the process
/// rather than serve a partial catalog.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// A dataset file could not be read from disk.
    #[error("failed to read dataset {}: {source}", .path.display())]
    Io {
        /// Path of the unreadable file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A dataset file did not contain the expected JSON array of records.
    #[error("failed to parse dataset {}: {source}", .path.display())]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}
