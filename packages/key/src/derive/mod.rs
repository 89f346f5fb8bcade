//! Memory-hard key derivation
//!
//! - [`config`]: scrypt work factors and presets
//! - [`stretch`]: salted stretching, synchronous or on the blocking pool

pub mod config;
pub mod stretch;

pub use config::ScryptConfig;
pub use stretch::KeyDerivation;
