//! # sigil-crypto — Cryptographic Primitives
//!
//! Provides the cryptographic building blocks for the Sigil stack:
//!
//! - **Hash-to-field** (`hash.rs`): domain-separated SHA-256 mapped into
//!   the BN254 scalar field. Every derivation in the stack carries a
//!   distinct single-byte domain tag.
//! - **Identity** (`identity.rs`): the per-user secret pair (trapdoor and
//!   nullifier seed), its derived public commitment, and the opaque
//!   persistence string held by the caller's environment.
//! - **Merkle group** (`merkle.rs`): fixed-depth Merkle commitment over an
//!   ordered member set with zero-sentinel padding, plus inclusion paths
//!   for witness generation.
//! - **Signal codec** (`signal.rs`): deterministic encoding of short UTF-8
//!   content into a single field element, with a hard overflow error in
//!   place of truncation.
//! - **Context** (`context.rs`): the external nullifier identifier, hashed
//!   from an arbitrary-length label.
//!
//! ## Crate Policy
//!
//! - Depends only on `sigil-core` internally.
//! - No mocking of cryptographic operations in tests; all tests use real
//!   SHA-256 over real field elements.
//! - `unsafe` prohibited.

pub mod context;
pub mod hash;
pub mod identity;
pub mod merkle;
pub mod signal;

pub use context::ContextId;
pub use hash::hash_to_field;
pub use identity::{IdentityError, IdentitySecret};
pub use merkle::{Group, GroupError, InclusionPath, PathSide, PathStep, MAX_DEPTH};
pub use signal::{Signal, SignalError, MAX_SIGNAL_BYTES};
