//! Hash-seeded index extraction
//!
//! [`IndexExtractor`] turns one SHAKE256 instance into an unbounded sequence
//! of bounded draws. Every draw absorbs its seed into the running state and
//! then squeezes 256 bits from a copy of that state, so each output covers
//! the full history of absorbed seeds since construction:
//!
//! ```text
//! draw 1: SHAKE256(seed1)
//! draw 2: SHAKE256(seed1 || seed2)
//! draw n: SHAKE256(seed1 || ... || seedn)
//! ```
//!
//! The running state is never reset. Replacing this with an independent
//! digest per call, or an XOF stream read sequentially, changes every
//! derived cipherkey.
//!
//! `R mod modulo` carries a bias bounded by `modulo / 2^256`, which is
//! negligible for the alphabet sizes in use.

use crate::bigint::decode_bytes;
use crate::{HashError, Result};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;
use std::num::NonZeroUsize;

/// Bytes squeezed per draw (256 bits)
pub const DRAW_BYTES: usize = 32;

/// SHAKE256 extractor with an append-only absorbed history
#[derive(Clone)]
pub struct IndexExtractor {
    state: Shake256,
    absorbed: usize,
    draws: u64,
}

impl IndexExtractor {
    /// Create an extractor with nothing absorbed
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Shake256::default(),
            absorbed: 0,
            draws: 0,
        }
    }

    /// Absorb `seed`, digest the whole history and reduce into `[0, modulo)`
    pub fn draw(&mut self, seed: &[u8], modulo: NonZeroUsize) -> usize {
        let output = self.squeeze(seed);
        let value = decode_bytes(&output);

        // modulo fits in u64 on every supported target
        let remainder = value % (modulo.get() as u64);
        // zero has no digits
        let index = remainder.iter_u64_digits().next().unwrap_or(0);

        tracing::trace!(
            draws = self.draws,
            absorbed = self.absorbed,
            modulo = modulo.get(),
            "index drawn"
        );

        // remainder < modulo, so this never truncates
        index as usize
    }

    /// [`IndexExtractor::draw`] for a modulo only known at runtime
    ///
    /// # Errors
    ///
    /// Returns an error if `modulo` is zero. Nothing is absorbed in that case.
    pub fn draw_below(&mut self, seed: &[u8], modulo: usize) -> Result<usize> {
        let modulo = NonZeroUsize::new(modulo)
            .ok_or_else(|| HashError::invalid_parameters("draw modulo must be positive"))?;
        Ok(self.draw(seed, modulo))
    }

    /// Absorb `seed` and squeeze one 256-bit output over the whole history
    ///
    /// This is the raw material of [`IndexExtractor::draw`].
    pub fn squeeze(&mut self, seed: &[u8]) -> [u8; DRAW_BYTES] {
        self.state.update(seed);
        self.absorbed += seed.len();
        self.draws += 1;

        let mut output = [0u8; DRAW_BYTES];
        self.state.clone().finalize_xof().read(&mut output);
        output
    }

    /// Total number of bytes absorbed since construction
    #[must_use]
    pub fn absorbed_len(&self) -> usize {
        self.absorbed
    }

    /// Number of squeezes performed since construction
    #[must_use]
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl Default for IndexExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for IndexExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The sponge state is derived from secret material
        f.debug_struct("IndexExtractor")
            .field("absorbed", &self.absorbed)
            .field("draws", &self.draws)
            .finish_non_exhaustive()
    }
}
