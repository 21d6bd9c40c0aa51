//! Export sink error types.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while writing an artifact. Every variant names the destination.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The destination could not be created or written.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The CSV writer failed.
    #[error("Failed to write spreadsheet {}: {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },
}

impl ExportError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Destination path of the failed write.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Csv { path, .. } => path,
        }
    }
}
