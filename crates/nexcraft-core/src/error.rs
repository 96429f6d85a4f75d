//! Error types and handling for pack conversion

use std::path::PathBuf;
use thiserror::Error;

/// Standard Result type for conversion operations
pub type Result<T> = std::result::Result<T, NexcraftError>;

/// Main error type for conversion operations
#[derive(Debug, Error)]
pub enum NexcraftError {
    /// Configuration loading or validation errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source document could not be parsed
    #[error("Failed to parse '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    /// An output document could not be serialized
    #[error("Failed to serialize '{path}': {message}")]
    SerializeError { path: PathBuf, message: String },

    /// Source tree enumeration errors
    #[error("Discovery error: {message}")]
    DiscoveryError { message: String },
}

impl NexcraftError {
    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an I/O error bound to a path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialize_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::SerializeError {
            path: path.into(),
            message: message.into(),
        }
    }
}
