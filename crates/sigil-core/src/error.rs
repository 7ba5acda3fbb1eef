//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types shared across the Sigil stack. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Every error is recoverable at the caller level; nothing here is fatal
//!   to the process.
//! - Domain crates define their own error enums (`GroupError`,
//!   `SignalError`, `RequestError`, `PayloadError`) next to the code that
//!   raises them; this module holds only the errors of the foundational
//!   types plus the top-level aggregate.

use thiserror::Error;

/// Top-level error type for the Sigil stack.
#[derive(Error, Debug)]
pub enum SigilError {
    /// Field element construction or parsing failed.
    #[error("field error: {0}")]
    Field(#[from] FieldError),

    /// Canonicalization failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// Timestamp parsing or construction failed.
    #[error("temporal error: {0}")]
    Temporal(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error constructing or parsing a field element.
#[derive(Error, Debug)]
pub enum FieldError {
    /// The value is not below the BN254 scalar modulus.
    #[error("value {0} is not below the BN254 scalar modulus")]
    OutOfRange(String),

    /// The hex encoding is not 64 lowercase hex characters.
    #[error("invalid field element hex: {0}")]
    InvalidHex(String),
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    /// Numeric payload fields must be strings or integers.
    #[error("float values are not permitted in canonical representations: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
