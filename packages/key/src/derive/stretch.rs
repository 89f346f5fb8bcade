//! Salted scrypt stretching
//!
//! [`KeyDerivation`] holds a configuration and a salt, and stretches input
//! either inline ([`KeyDerivation::derive_key`]) or on Tokio's blocking pool
//! ([`KeyDerivation::stretch`]). The blocking-pool variant is the only place
//! a derivation yields to the runtime.

use super::config::ScryptConfig;
use crate::{KeyError, KeyResult, Result};
use std::time::Instant;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use zeroize::Zeroizing;

/// Key derivation context for scrypt stretching
/// Salt and input copies are zeroized when dropped
pub struct KeyDerivation {
    config: ScryptConfig,
    salt: Option<Zeroizing<Vec<u8>>>,
}

impl KeyDerivation {
    /// Create a new key derivation context
    #[must_use]
    pub fn new(config: ScryptConfig) -> Self {
        Self { config, salt: None }
    }

    /// Set the salt for key derivation
    /// Salt will be zeroized automatically
    #[must_use]
    pub fn with_salt(mut self, salt: Vec<u8>) -> Self {
        self.salt = Some(Zeroizing::new(salt));
        self
    }

    /// Derive a key from input material on the current thread
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No salt was provided for key derivation
    /// - The configured work factors are invalid
    /// - The requested output length is rejected by scrypt
    pub fn derive_key(&self, input: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        let salt = self
            .salt
            .as_ref()
            .ok_or_else(|| KeyError::invalid_parameters("Salt not provided for key derivation"))?;

        let params = self.config.params().inspect_err(|e| {
            tracing::warn!(error = %e, "rejected scrypt configuration");
        })?;

        let mut output = Zeroizing::new(vec![0u8; self.config.output_len]);
        scrypt::scrypt(input, salt, &params, &mut output)
            .map_err(|e| KeyError::KeyDerivation(format!("scrypt failed: {e}")))?;

        Ok(output)
    }

    /// Stretch input on the blocking pool
    ///
    /// The returned [`KeyResult`] resolves once scrypt finishes. Outside a
    /// Tokio runtime the stretch runs inline and the result is ready on the
    /// first poll.
    pub fn stretch(self, input: impl Into<Vec<u8>>) -> KeyResult {
        let input = Zeroizing::new(input.into());

        let Ok(handle) = Handle::try_current() else {
            tracing::debug!("no Tokio runtime, stretching inline");
            return KeyResult::ready(self.timed_derive(&input));
        };

        let (tx, rx) = oneshot::channel();
        handle.spawn_blocking(move || {
            let _ = tx.send(self.timed_derive(&input));
        });

        KeyResult::new(rx)
    }

    fn timed_derive(&self, input: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        let started = Instant::now();
        let result = self.derive_key(input);
        tracing::debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            cpu_cost = self.config.cpu_cost,
            success = result.is_ok(),
            "scrypt stretch finished"
        );
        result
    }

    /// Get the current salt (if set)
    #[must_use]
    pub fn salt(&self) -> Option<&[u8]> {
        self.salt.as_ref().map(|s| s.as_slice())
    }

    /// Get the KDF configuration
    #[must_use]
    pub fn config(&self) -> &ScryptConfig {
        &self.config
    }
}

impl Default for KeyDerivation {
    fn default() -> Self {
        Self::new(ScryptConfig::default())
    }
}
