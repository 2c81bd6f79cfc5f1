//! Error types for startup and content loading.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort the browser entry point before anything renders.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StartupError {
    /// The element the app mounts into does not exist in the document.
    #[error("failed to find the mount node `#{id}`")]
    MissingMountNode {
        /// Element id that was looked up
        id: &'static str,
    },
}

/// Failures while loading a content override file.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The file could not be read.
    #[error("failed to read content file {}", path.display())]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid content JSON.
    #[error("invalid content JSON")]
    Parse {
        /// Underlying parse error
        #[from]
        source: serde_json::Error,
    },
}
