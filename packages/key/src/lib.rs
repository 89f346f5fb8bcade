//! # Cipherkey Key Stretching
//!
//! Memory-hard stretching of pre-hashed master secrets.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cipherkey_key::{KeyDerivation, ScryptConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), cipherkey_key::KeyError> {
//! let stretched = KeyDerivation::new(ScryptConfig::standard())
//!     .with_salt(b"example.comalice".to_vec())
//!     .stretch(b"pre-hashed secret".to_vec())
//!     .await?;
//! assert_eq!(stretched.len(), 32);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod derive;
pub mod error;
pub mod key_result;

// Re-export core types
pub use derive::{KeyDerivation, ScryptConfig};
pub use error::{KeyError, Result};
pub use key_result::KeyResult;
