//! Hash primitives behind cipherkey derivation
//!
//! - [`bigint`]: big-endian decoding of digests into arbitrary-precision integers
//! - [`prehash`]: the SHA3-512 normalization applied to master secrets
//! - [`extractor`]: SHAKE256-backed index extraction over a growing input history

#![forbid(unsafe_code)]

pub mod bigint;
pub mod error;
pub mod extractor;
pub mod prehash;

// Re-export error types
pub use error::{HashError, Result};

pub use bigint::{decode, decode_bytes, decode_with_width, BigEndianDigit};
pub use extractor::{IndexExtractor, DRAW_BYTES};
pub use prehash::{sha3_512_hex, Sha3_512Builder, Sha3_512Digest, SHA3_512_LEN};

/// Main entry point for hash operations
pub struct Hash;

impl Hash {
    /// SHA3-512 pre-hash builder
    #[must_use]
    pub fn sha3_512() -> Sha3_512Builder {
        Sha3_512Builder::new()
    }

    /// Fresh SHAKE256 index extractor with an empty history
    #[must_use]
    pub fn extractor() -> IndexExtractor {
        IndexExtractor::new()
    }
}
