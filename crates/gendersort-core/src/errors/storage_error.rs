//! Storage errors. Fatal for the operation that raised them.

use super::error_code::{self, GendersortErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Required resource not found: {path}")]
    MissingResource { path: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to persist {path}: {message}")]
    Persist { path: String, message: String },
}

impl StorageError {
    /// Wraps an `io::Error`, promoting `NotFound` to `MissingResource`.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::MissingResource { path }
        } else {
            Self::Io { path, source }
        }
    }
}

impl GendersortErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingResource { .. } => error_code::MISSING_RESOURCE,
            Self::Io { .. } => error_code::STORAGE_ERROR,
            Self::Persist { .. } => error_code::PERSIST_FAILED,
        }
    }
}
