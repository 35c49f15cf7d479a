//! Error types for envfile-fs

use std::path::PathBuf;

/// Result type for envfile-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in envfile-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("The file '{path}' was not found")]
    NotFound { path: PathBuf },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to replace {path} with temporary file: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap an I/O error, mapping `NotFound` to [`Error::NotFound`].
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}
