//! # Hash-to-Field — Domain-Separated SHA-256
//!
//! Maps byte inputs into the BN254 scalar field via SHA-256 with
//! single-byte domain separation tags.
//!
//! ## Security Invariant
//!
//! Every derivation in the stack uses a distinct domain tag, so a value
//! computed in one role (say, a Merkle node) can never be replayed in
//! another (say, a nullifier). The tag is hashed first, before any input
//! bytes.

use sha2::{Digest, Sha256};
use sigil_core::FieldElement;

/// Merkle tree node hashing.
pub const DOMAIN_NODE: u8 = 0x01;
/// Identity commitment derivation.
pub const DOMAIN_COMMITMENT: u8 = 0x02;
/// Nullifier hash derivation.
pub const DOMAIN_NULLIFIER: u8 = 0x03;
/// Context identifier derivation.
pub const DOMAIN_CONTEXT: u8 = 0x04;
/// Proof binding tag (transparent reference prover).
pub const DOMAIN_BINDING: u8 = 0x05;

/// Hash the concatenation of `parts` under `domain` into the field.
///
/// The output is masked to 253 bits by `FieldElement::from_hash`, so the
/// result is always a valid field element.
pub fn hash_to_field(domain: u8, parts: &[&[u8]]) -> FieldElement {
    let mut hasher = Sha256::new();
    hasher.update([domain]);
    for part in parts {
        hasher.update(part);
    }
    FieldElement::from_hash(hasher.finalize().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let a = hash_to_field(DOMAIN_NODE, &[b"left", b"right"]);
        let b = hash_to_field(DOMAIN_NODE, &[b"left", b"right"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_domain_separation() {
        let node = hash_to_field(DOMAIN_NODE, &[b"input"]);
        let commitment = hash_to_field(DOMAIN_COMMITMENT, &[b"input"]);
        assert_ne!(node, commitment);
    }

    #[test]
    fn test_input_sensitivity() {
        let a = hash_to_field(DOMAIN_NODE, &[b"a"]);
        let b = hash_to_field(DOMAIN_NODE, &[b"b"]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_output_in_range() {
        use sigil_core::field::MODULUS;
        let fe = hash_to_field(DOMAIN_BINDING, &[&[0xffu8; 64]]);
        assert!(fe.to_be_bytes() < MODULUS);
    }
}
