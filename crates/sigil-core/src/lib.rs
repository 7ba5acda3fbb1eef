//! # sigil-core — Foundational Types for the Sigil Stack
//!
//! This crate is the bedrock of the Sigil anonymous-signal stack. It defines
//! the type-system primitives every other crate builds on. Every other crate
//! in the workspace depends on `sigil-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **`FieldElement` is range-checked by construction.** Every 32-byte
//!    value in the proving domain flows through a constructor that enforces
//!    the BN254 scalar bound. No bare `[u8; 32]` for field values.
//!
//! 2. **`CanonicalBytes` newtype.** All transport payload bytes flow through
//!    `CanonicalBytes::new()`. No raw `serde_json::to_vec()` for anything
//!    that must be byte-stable across independent packagings.
//!
//! 3. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `sigil-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod error;
pub mod field;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use error::{CanonicalizationError, FieldError, SigilError};
pub use field::FieldElement;
pub use temporal::Timestamp;
