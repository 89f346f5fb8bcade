//! Structured logging infrastructure
//!
//! Provides env_logger-based logging with secure handling of sensitive data.
//! Library crates emit through `tracing`, whose `log` bridge forwards every
//! event to the logger installed here.

use log::{debug, error, info, warn};
use sha2::{Digest, Sha256};
use std::sync::Once;
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Number of hex characters kept from a fingerprint digest
const FINGERPRINT_LEN: usize = 12;

/// Logging infrastructure using `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Configure logging levels via `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Enable every derivation step
    /// - `RUST_LOG=info` - Enable info and above
    /// - `RUST_LOG=cipherkey=debug,cipherkey_key=info` - Module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Use this in test modules to avoid initialization conflicts
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log the start of a derivation without disclosing site or user
    pub fn log_derivation(length: usize, site: &str, user: &str) {
        info!(
            "Deriving cipherkey (length: {length}, site: {}, user: {})",
            Self::fingerprint(site),
            Self::fingerprint(user)
        );
    }

    /// Log a sanitation pass and the number of replaced characters
    pub fn log_sanitize(remove_symbols: bool, remove_numbers: bool, replaced: usize) {
        debug!(
            "Sanitized cipherkey (remove_symbols: {remove_symbols}, remove_numbers: {remove_numbers}, replaced: {replaced})"
        );
    }

    /// Secure logging of cryptographic errors
    ///
    /// Logs error types without exposing sensitive data
    pub fn log_crypto_error(operation: &str, error: &dyn std::error::Error) {
        error!(
            "Cryptographic operation failed: {} (error_type: {})",
            operation,
            std::any::type_name_of_val(error)
        );
    }

    /// Log performance metrics and timing information
    pub fn log_performance_metric(operation: &str, elapsed: Duration, success: bool) {
        let millis = elapsed.as_millis();
        if success {
            debug!("Performance: {operation} completed in {millis}ms");
        } else {
            warn!("Performance: {operation} failed after {millis}ms");
        }
    }

    /// Short SHA-256 tag for an identifier
    ///
    /// Identical inputs map to identical tags, so a site can be followed
    /// across log lines without its name being written out.
    #[must_use]
    pub fn fingerprint(value: &str) -> String {
        let hash = Sha256::digest(value.as_bytes());
        let hex_hash = format!("{hash:x}");
        format!("#{}", &hex_hash[..FINGERPRINT_LEN])
    }
}
