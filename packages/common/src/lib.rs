//! Common infrastructure and utilities for the cipherkey crates
//!
//! This crate provides shared functionality used across all cipherkey crates:
//! - Logger bootstrap driven by `RUST_LOG`
//! - Privacy-preserving identifiers for log output

#![forbid(unsafe_code)]

pub mod logging;

pub use logging::LoggingTransformer;
