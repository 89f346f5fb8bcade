//! Error handling for key module

use thiserror::Error;

/// Key-specific errors
#[derive(Debug, Error)]
pub enum KeyError {
    /// KDF parameters were rejected before any work was done
    #[error("Invalid KDF parameters: {0}")]
    InvalidParameters(String),

    /// Key derivation error occurred
    #[error("Key derivation error: {0}")]
    KeyDerivation(String),

    /// Internal error occurred
    #[error("Internal error: {0}")]
    Internal(String),
}

impl KeyError {
    /// Create an `invalid_parameters` error
    pub fn invalid_parameters(msg: impl Into<String>) -> Self {
        Self::InvalidParameters(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type for key operations
pub type Result<T> = std::result::Result<T, KeyError>;
