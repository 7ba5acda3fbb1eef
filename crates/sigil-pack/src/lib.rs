//! # sigil-pack — Transport Packaging
//!
//! Serializes proof bundles into canonical JSON payloads and recovers
//! them on the consumer side:
//!
//! - **Payload** (`payload.rs`): the wire form of a proof bundle. Packing
//!   is canonical (RFC 8785), so equal bundles always produce identical
//!   bytes, and the result is size-checked against single-QR capacity.
//!
//! ## Crate Policy
//!
//! - Depends only on `sigil-core`, `sigil-crypto`, and `sigil-proof`
//!   internally.
//! - Packing the same bundle twice must produce byte-identical output.

pub mod payload;

pub use payload::{pack, unpack, PayloadError, MAX_PAYLOAD_BYTES};
