//! Scrypt configuration
//!
//! Work factors are part of the derivation contract: every cipherkey ever
//! produced under [`ScryptConfig::standard`] depends on these exact values.

use crate::{KeyError, Result};
use serde::{Deserialize, Serialize};

/// Scrypt work factors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScryptConfig {
    /// CPU/memory cost `N`, a power of two no smaller than 2
    pub cpu_cost: u64,
    /// Block size `r`
    pub block_size: u32,
    /// Parallelism `p`
    pub parallelism: u32,
    /// Stretched key length in bytes
    pub output_len: usize,
}

impl ScryptConfig {
    /// `N` of the standard preset (2^15)
    pub const STANDARD_CPU_COST: u64 = 1 << 15;
    /// `r` of the standard preset
    pub const STANDARD_BLOCK_SIZE: u32 = 8;
    /// `p` of the standard preset
    pub const STANDARD_PARALLELISM: u32 = 1;
    /// Stretched key length of the standard preset
    pub const STANDARD_OUTPUT_LEN: usize = 32;

    /// Parameters every published cipherkey is derived with
    #[must_use]
    pub fn standard() -> Self {
        Self {
            cpu_cost: Self::STANDARD_CPU_COST,
            block_size: Self::STANDARD_BLOCK_SIZE,
            parallelism: Self::STANDARD_PARALLELISM,
            output_len: Self::STANDARD_OUTPUT_LEN,
        }
    }

    /// Half the memory of the standard preset
    ///
    /// Produces different keys than [`ScryptConfig::standard`].
    #[must_use]
    pub fn interactive() -> Self {
        Self {
            cpu_cost: 1 << 14,
            ..Self::standard()
        }
    }

    /// Minimal work factors for tests
    #[must_use]
    pub fn testing() -> Self {
        Self {
            cpu_cost: 1 << 4,
            block_size: 1,
            parallelism: 1,
            output_len: Self::STANDARD_OUTPUT_LEN,
        }
    }

    /// Base-2 logarithm of the CPU/memory cost
    ///
    /// # Errors
    ///
    /// Returns an error if the cost is below 2 or not a power of two
    pub fn log_n(&self) -> Result<u8> {
        if self.cpu_cost < 2 || !self.cpu_cost.is_power_of_two() {
            return Err(KeyError::invalid_parameters(format!(
                "cpu cost must be a power of two >= 2, got {}",
                self.cpu_cost
            )));
        }
        // at most 63
        Ok(self.cpu_cost.trailing_zeros() as u8)
    }

    /// Check every parameter and build scrypt's own parameter set
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The CPU/memory cost is not a power of two >= 2
    /// - Block size, parallelism or output length is zero
    /// - The scrypt crate rejects the combination
    pub fn params(&self) -> Result<scrypt::Params> {
        let log_n = self.log_n()?;
        if self.block_size == 0 {
            return Err(KeyError::invalid_parameters("block size must be positive"));
        }
        if self.parallelism == 0 {
            return Err(KeyError::invalid_parameters("parallelism must be positive"));
        }
        if self.output_len == 0 {
            return Err(KeyError::invalid_parameters("output length must be positive"));
        }

        scrypt::Params::new(log_n, self.block_size, self.parallelism, self.output_len)
            .map_err(|e| KeyError::invalid_parameters(format!("scrypt rejected parameters: {e}")))
    }

    /// Validate without keeping the parameter set
    ///
    /// # Errors
    ///
    /// Same conditions as [`ScryptConfig::params`]
    pub fn validate(&self) -> Result<()> {
        self.params().map(|_| ())
    }
}

impl Default for ScryptConfig {
    fn default() -> Self {
        Self::standard()
    }
}
