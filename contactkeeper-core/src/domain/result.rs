//! Result and error types for the core library

use std::path::PathBuf;

use thiserror::Error;

/// Core library error type
///
/// "Not found" is never an error here: lookups by id return `Ok(None)`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The contact data file holds something that is not a contact list
    #[error("Repository corrupted: {message}")]
    RepositoryCorrupted {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Access denied: {}", path.display())]
    AccessDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a data integrity error
    pub fn data_integrity(msg: impl Into<String>) -> Self {
        Self::DataIntegrity(msg.into())
    }

    pub fn corrupted(msg: impl Into<String>, source: serde_json::Error) -> Self {
        Self::RepositoryCorrupted {
            message: msg.into(),
            source,
        }
    }

    /// Map an I/O error on `path`, keeping permission failures distinct
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::PermissionDenied {
            Self::AccessDenied {
                path: path.into(),
                source: err,
            }
        } else {
            Self::Io(err)
        }
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
