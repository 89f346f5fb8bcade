//! # Cipherkey
//!
//! Reproducible, high-entropy site passwords derived from a master secret.
//! Nothing is stored: the same secret, site and user always yield the same
//! cipherkey, and changing any of them yields an unrelated one.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cipherkey::Cipherkey;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), cipherkey::CipherkeyError> {
//! let key = Cipherkey::generator(16)
//!     .site("example.com")
//!     .user("alice")
//!     .generate("correct horse battery staple")
//!     .await?;
//! assert!(key.covers_all_classes());
//!
//! // Some sites reject symbols
//! let letters_and_digits = key.sanitized(true, false);
//! assert_eq!(letters_and_digits.len(), 16);
//! # Ok(())
//! # }
//! ```
//!
//! Every derivation is built from three stages: a SHA3-512 pre-hash of the
//! secret, an scrypt stretch salted with `site || user`, and SHAKE256 index
//! extraction that places one lowercase letter, one uppercase letter, one
//! symbol and one digit at distinct positions.

#![forbid(unsafe_code)]

pub mod alphabet;
pub mod error;
pub mod generator;
pub mod output;
pub mod sanitizer;

pub use alphabet::{Alphabet, CharClass};
pub use error::{CipherkeyError, Result};
pub use generator::{
    from_stretched_key, generate, generate_from_bytes, CipherkeyGenerator, MIN_LENGTH,
};
pub use output::Cipherkey;
pub use sanitizer::{sanitize, Sanitizer};

pub use cipherkey_common::LoggingTransformer;
pub use cipherkey_key::ScryptConfig;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        generate, sanitize, CharClass, Cipherkey, CipherkeyError, CipherkeyGenerator, Result,
        Sanitizer, ScryptConfig,
    };
}
