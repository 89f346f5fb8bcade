//! Character-class coverage generator
//!
//! Derivation runs in four stages:
//!
//! 1. SHA3-512 of the secret, hex encoded.
//! 2. scrypt of that hex string, salted with `site || user`.
//! 3. Four distinct positions drawn without replacement from `[0, length)`,
//!    bound to lowercase, uppercase, symbol and digit in that order.
//! 4. One character per position, from the bound class or from the full
//!    alphabet.
//!
//! Every draw in stages 3 and 4 feeds the whole stretched key into a single
//! [`IndexExtractor`], so the sequence of draws is fixed by the stretched key.

use crate::alphabet::{CharClass, ALLOWED_ALL};
use crate::{Cipherkey, CipherkeyError, Result};
use cipherkey_common::LoggingTransformer;
use cipherkey_hashing::{sha3_512_hex, IndexExtractor};
use cipherkey_key::{KeyDerivation, ScryptConfig};
use std::time::Instant;
use zeroize::Zeroizing;

/// Shortest cipherkey that can hold one character of every guaranteed class
pub const MIN_LENGTH: usize = CharClass::GUARANTEED.len();

/// Builder for a single derivation
#[derive(Debug, Clone)]
pub struct CipherkeyGenerator {
    length: usize,
    site: String,
    user: String,
    kdf: ScryptConfig,
}

impl CipherkeyGenerator {
    /// Derive `length` characters with the standard scrypt preset
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            length,
            site: String::new(),
            user: String::new(),
            kdf: ScryptConfig::standard(),
        }
    }

    /// Website the key is for
    #[must_use]
    pub fn site(mut self, site: impl Into<String>) -> Self {
        self.site = site.into();
        self
    }

    /// Account name on that website
    #[must_use]
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    /// Override the scrypt work factors
    ///
    /// Keys derived under a non-standard preset differ from standard ones.
    #[must_use]
    pub fn kdf(mut self, config: ScryptConfig) -> Self {
        self.kdf = config;
        self
    }

    /// Derive the cipherkey for `secret`
    ///
    /// The scrypt stretch runs on Tokio's blocking pool; this is the only
    /// point where the call yields.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The length is below [`MIN_LENGTH`]
    /// - The output buffer for the length cannot be allocated
    /// - The scrypt configuration is invalid
    ///
    /// Both length checks run before any hashing.
    pub async fn generate(&self, secret: &str) -> Result<Cipherkey> {
        let output = reserve_output(self.length)?;
        LoggingTransformer::log_derivation(self.length, &self.site, &self.user);

        let prehashed = Zeroizing::new(sha3_512_hex(secret));
        tracing::debug!("secret pre-hashed");

        let mut salt = Vec::with_capacity(self.site.len() + self.user.len());
        salt.extend_from_slice(self.site.as_bytes());
        salt.extend_from_slice(self.user.as_bytes());

        let started = Instant::now();
        let stretched = KeyDerivation::new(self.kdf)
            .with_salt(salt)
            .stretch(prehashed.as_bytes().to_vec())
            .await
            .inspect_err(|e| LoggingTransformer::log_crypto_error("scrypt stretch", e))?;
        LoggingTransformer::log_performance_metric("scrypt stretch", started.elapsed(), true);

        emit(&stretched, self.length, output)
    }

    /// [`CipherkeyGenerator::generate`] for a secret held as raw bytes
    ///
    /// # Errors
    ///
    /// Returns [`CipherkeyError::Encoding`] if `secret` is not UTF-8, and
    /// otherwise the errors of [`CipherkeyGenerator::generate`].
    pub async fn generate_from_bytes(&self, secret: &[u8]) -> Result<Cipherkey> {
        let secret = std::str::from_utf8(secret)?;
        self.generate(secret).await
    }
}

/// Derive a cipherkey with the standard scrypt preset
///
/// # Errors
///
/// Returns an error if `length` is below [`MIN_LENGTH`] or cannot be
/// allocated.
pub async fn generate(secret: &str, length: usize, site: &str, user: &str) -> Result<Cipherkey> {
    CipherkeyGenerator::new(length)
        .site(site)
        .user(user)
        .generate(secret)
        .await
}

/// Derive a cipherkey from a secret held as raw bytes
///
/// # Errors
///
/// Returns an error if `secret` is not UTF-8, or `length` is below
/// [`MIN_LENGTH`] or cannot be allocated.
pub async fn generate_from_bytes(
    secret: &[u8],
    length: usize,
    site: &str,
    user: &str,
) -> Result<Cipherkey> {
    CipherkeyGenerator::new(length)
        .site(site)
        .user(user)
        .generate_from_bytes(secret)
        .await
}

/// Build a cipherkey from an already stretched key
///
/// Runs the position assignment and character emission stages alone. Any
/// stretched key length works; every draw absorbs the whole of it.
///
/// # Errors
///
/// Returns an error if `length` is below [`MIN_LENGTH`] or cannot be
/// allocated.
pub fn from_stretched_key(stretched: &[u8], length: usize) -> Result<Cipherkey> {
    let output = reserve_output(length)?;
    emit(stretched, length, output)
}

fn emit(stretched: &[u8], length: usize, mut value: String) -> Result<Cipherkey> {
    let mut extractor = IndexExtractor::new();
    let positions = GuaranteePositions::draw(&mut extractor, stretched, length)?;
    tracing::debug!(draws = extractor.draws(), "guarantee positions assigned");

    for position in 0..length {
        let alphabet = match positions.class_at(position) {
            Some(class) => class.alphabet(),
            None => &ALLOWED_ALL,
        };
        value.push(alphabet.pick(&mut extractor, stretched));
    }

    tracing::debug!(
        draws = extractor.draws(),
        absorbed = extractor.absorbed_len(),
        "cipherkey emitted"
    );
    Ok(Cipherkey::from(value))
}

fn check_length(length: usize) -> Result<()> {
    if length < MIN_LENGTH {
        tracing::warn!(length, minimum = MIN_LENGTH, "cipherkey length rejected");
        return Err(CipherkeyError::LengthTooShort {
            requested: length,
            minimum: MIN_LENGTH,
        });
    }
    Ok(())
}

fn reserve_output(length: usize) -> Result<String> {
    check_length(length)?;

    let mut value = String::new();
    value.try_reserve_exact(length).map_err(|_| {
        tracing::warn!(length, "cipherkey length cannot be allocated");
        CipherkeyError::LengthTooLong { requested: length }
    })?;
    Ok(value)
}

/// Positions reserved for the guaranteed classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GuaranteePositions {
    slots: [usize; MIN_LENGTH],
}

impl GuaranteePositions {
    /// Draw distinct positions from a shrinking pool, one per guaranteed class
    ///
    /// The pool `[0, length)` minus the positions already taken is never
    /// materialized; a draw of `index` maps to the `index`-th free position.
    pub(crate) fn draw(
        extractor: &mut IndexExtractor,
        seed: &[u8],
        length: usize,
    ) -> Result<Self> {
        let mut slots = [0usize; MIN_LENGTH];

        for taken in 0..MIN_LENGTH {
            let index = extractor.draw_below(seed, length.saturating_sub(taken))?;
            slots[taken] = nth_free(&slots[..taken], index);
        }

        Ok(Self { slots })
    }

    /// Class bound to `position`, if any
    pub(crate) fn class_at(&self, position: usize) -> Option<CharClass> {
        self.slots
            .iter()
            .position(|slot| *slot == position)
            .map(|i| CharClass::GUARANTEED[i])
    }

    #[cfg(test)]
    pub(crate) fn slots(&self) -> [usize; MIN_LENGTH] {
        self.slots
    }
}

/// `index`-th element of `[0, ..)` with the `taken` positions removed
fn nth_free(taken: &[usize], index: usize) -> usize {
    let mut sorted = [usize::MAX; MIN_LENGTH];
    sorted[..taken.len()].copy_from_slice(taken);
    sorted[..taken.len()].sort_unstable();

    let mut position = index;
    for slot in &sorted[..taken.len()] {
        if *slot <= position {
            position += 1;
        }
    }
    position
}
