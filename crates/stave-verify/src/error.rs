//! Error types for verification

use thiserror::Error;

/// Errors that can occur around a verification run
///
/// A negative equality verdict is never an error; these cover configuration
/// and the collaborator's rebuild step.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tolerance rejected (non-finite or not strictly positive)
    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(String),

    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The rebuild step of a round trip failed
    #[error("Rebuild failed: {0}")]
    Rebuild(String),
}

/// Result type for verification operations
pub type Result<T> = std::result::Result<T, VerifyError>;
