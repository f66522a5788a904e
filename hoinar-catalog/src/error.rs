//! Error types raised while loading venues or persisting reviews.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised by the venue catalogue and the review store.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading the venue dataset file failed.
    #[error("failed to read venue dataset at {path}")]
    Open {
        /// Requested dataset path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Parsing the venue dataset JSON failed.
    #[error("failed to parse venue dataset at {path}")]
    Parse {
        /// Path of the malformed dataset.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Opening the `SQLite` review database failed.
    #[error("failed to open review database at {path}")]
    OpenStore {
        /// Requested database path.
        path: Utf8PathBuf,
        /// Source error from `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Preparing or executing a review-store statement failed.
    #[error("failed to {operation}")]
    Store {
        /// Description of the failed operation.
        operation: &'static str,
        /// Source error from `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
}
