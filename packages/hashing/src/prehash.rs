//! SHA3-512 pre-hash
//!
//! Master secrets are normalized to a fixed-size hex string before they reach
//! the memory-hard stage.

use sha3::{Digest, Sha3_512};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of a SHA3-512 digest in bytes
pub const SHA3_512_LEN: usize = 64;

/// SHA3-512 digest of secret material
///
/// Wiped on drop; `Debug` never prints the bytes.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Sha3_512Digest {
    bytes: [u8; SHA3_512_LEN],
}

impl Sha3_512Digest {
    /// Raw digest bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; SHA3_512_LEN] {
        &self.bytes
    }

    /// Lowercase hexadecimal encoding
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl AsRef<[u8]> for Sha3_512Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Debug for Sha3_512Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Sha3_512Digest(..)")
    }
}

/// SHA3-512 hash builder
#[derive(Clone, Debug, Default)]
pub struct Sha3_512Builder;

impl Sha3_512Builder {
    /// Create new SHA3-512 builder
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Compute SHA3-512 hash
    #[must_use]
    pub fn compute<T: AsRef<[u8]>>(&self, data: T) -> Sha3_512Digest {
        let mut bytes = [0u8; SHA3_512_LEN];
        bytes.copy_from_slice(&Sha3_512::digest(data.as_ref()));
        Sha3_512Digest { bytes }
    }
}

/// Lowercase hex SHA3-512 digest of the UTF-8 encoding of `text`
#[must_use]
pub fn sha3_512_hex(text: &str) -> String {
    Sha3_512Builder::new().compute(text.as_bytes()).to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_sha3_512_empty() {
        let digest = Sha3_512Builder::new().compute(b"");
        assert_eq!(
            digest.as_bytes(),
            &hex!(
                "a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a6"
                "15b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26"
            )
        );
    }

    #[test]
    fn test_sha3_512_abc_hex() {
        assert_eq!(
            sha3_512_hex("abc"),
            "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e\
             10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0"
        );
    }

    #[test]
    fn test_hex_is_fixed_length() {
        assert_eq!(sha3_512_hex("").len(), 2 * SHA3_512_LEN);
        assert_eq!(sha3_512_hex(&"x".repeat(10_000)).len(), 2 * SHA3_512_LEN);
    }

    #[test]
    fn test_debug_hides_bytes() {
        let digest = Sha3_512Builder::new().compute("secret");
        assert_eq!(format!("{digest:?}"), "Sha3_512Digest(..)");
    }

    #[test]
    fn test_zeroize_wipes_bytes() {
        let mut digest = Sha3_512Builder::new().compute("secret");
        digest.zeroize();
        assert_eq!(digest.as_bytes(), &[0u8; SHA3_512_LEN]);
    }
}
