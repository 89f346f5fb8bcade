//! Error handling for cipherkey derivation

use cipherkey_hashing::HashError;
use cipherkey_key::KeyError;
use thiserror::Error;

/// Derivation errors
///
/// Every failure is terminal for the call that raised it. Derivation is
/// deterministic, so retrying with the same inputs fails the same way.
#[derive(Debug, Error)]
pub enum CipherkeyError {
    /// Requested length cannot hold one character of every mandatory class
    #[error("Cipherkey length {requested} is below the minimum of {minimum}")]
    LengthTooShort {
        /// Length asked for
        requested: usize,
        /// Smallest length that satisfies class coverage
        minimum: usize,
    },

    /// Output buffer for the requested length cannot be allocated
    #[error("Cipherkey length {requested} cannot be allocated")]
    LengthTooLong {
        /// Length asked for
        requested: usize,
    },

    /// Secret bytes are not valid UTF-8
    #[error("Secret is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// Key stretching failed or was misconfigured
    #[error(transparent)]
    Kdf(#[from] KeyError),

    /// Index extraction was asked for an impossible draw
    #[error(transparent)]
    Hash(#[from] HashError),
}

/// Result type for cipherkey operations
pub type Result<T> = std::result::Result<T, CipherkeyError>;
