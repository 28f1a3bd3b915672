//! Error types for arcscan-core

use std::path::PathBuf;
use thiserror::Error;

/// Core error types for the arcscan library
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The directory to scan does not exist
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Invalid file or directory path
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// ZIP-specific error
    #[error("Zip error: {0}")]
    Zip(String),

    /// 7z-specific error
    #[error("7z error: {0}")]
    SevenZ(String),

    /// RAR-specific error
    #[error("Rar error: {0}")]
    Rar(String),

    /// Report serialization or parsing failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration-related error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Some archives of a batch could not be extracted
    #[error("{failed} of {total} archives failed to extract")]
    PartialFailure { failed: usize, total: usize },

    /// Generic error for other cases
    #[error("Other error: {0}")]
    Other(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Zip(err.to_string())
    }
}

impl From<sevenz_rust::Error> for Error {
    fn from(err: sevenz_rust::Error) -> Self {
        Error::SevenZ(err.to_string())
    }
}

impl From<unrar::error::UnrarError> for Error {
    fn from(err: unrar::error::UnrarError) -> Self {
        Error::Rar(err.to_string())
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::Io(err.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
