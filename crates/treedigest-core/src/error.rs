//! Error types for treedigest-core

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while digesting a single entry
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{task} task for {} did not complete: {source}", .path.display())]
    Task {
        task: &'static str,
        path: PathBuf,
        #[source]
        source: tokio::task::JoinError,
    },
}

impl DigestError {
    /// Path of the entry that failed
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Task { path, .. } => path,
        }
    }
}

/// Errors that abort a whole scan
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to write record: {0}")]
    Output(#[from] std::io::Error),
}
