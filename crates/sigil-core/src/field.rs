//! # Field Elements — BN254 Scalar Domain
//!
//! Defines `FieldElement`, the 32-byte big-endian scalar type for every
//! value that enters the proving system's numeric domain: identity
//! commitments, Merkle roots, nullifier hashes, encoded signals, and
//! context identifiers.
//!
//! ## Security Invariant
//!
//! A `FieldElement` is always strictly below the BN254 scalar modulus.
//! The checked constructor rejects out-of-range bytes, and the hash
//! constructor masks its input to 253 bits, which is below the 254-bit
//! modulus. Downstream code never needs to re-validate.
//!
//! Big-endian fixed-width encoding makes byte-lexicographic comparison
//! equal to numeric comparison, so the range check is a plain slice
//! compare with no big-integer arithmetic.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FieldError;

/// The BN254 scalar field modulus, big-endian.
///
/// r = 21888242871839275222246405745257275088548364400416034343698204186575808495617
pub const MODULUS: [u8; 32] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58,
    0x5d, 0x28, 0x33, 0xe8, 0x48, 0x79, 0xb9, 0x70, 0x91, 0x43, 0xe1, 0xf5, 0x93, 0xf0, 0x00,
    0x00, 0x01,
];

/// A scalar in the BN254 field, stored as 32 big-endian bytes.
///
/// # Invariants
///
/// - The value is strictly below [`MODULUS`].
/// - Ordering and equality are byte-lexicographic, which equals numeric
///   order for this encoding.
///
/// Serializes as a 64-character lowercase hex string.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldElement([u8; 32]);

impl FieldElement {
    /// The additive identity, also the Merkle zero-leaf sentinel.
    pub const ZERO: FieldElement = FieldElement([0u8; 32]);

    /// Construct a field element from big-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::OutOfRange` when the value is not below the
    /// modulus.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Result<Self, FieldError> {
        if bytes >= MODULUS {
            return Err(FieldError::OutOfRange(bytes_to_hex(&bytes)));
        }
        Ok(Self(bytes))
    }

    /// Construct a field element from a 32-byte hash output.
    ///
    /// The top three bits are cleared, bounding the value below 2^253 and
    /// therefore below the 254-bit modulus. This is the standard
    /// hash-to-field path; it never fails.
    pub fn from_hash(mut digest: [u8; 32]) -> Self {
        digest[0] &= 0x1f;
        Self(digest)
    }

    /// The big-endian byte representation.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Render as 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }

    /// Parse from a 64-character hex string, range-checked.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::InvalidHex` for malformed hex and
    /// `FieldError::OutOfRange` for values at or above the modulus.
    pub fn from_hex(hex: &str) -> Result<Self, FieldError> {
        let hex = hex.trim().to_lowercase();
        if hex.len() != 64 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(FieldError::InvalidHex(hex));
        }
        let mut bytes = [0u8; 32];
        for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
            let s = std::str::from_utf8(chunk)
                .map_err(|_| FieldError::InvalidHex(hex.clone()))?;
            bytes[i] = u8::from_str_radix(s, 16)
                .map_err(|_| FieldError::InvalidHex(hex.clone()))?;
        }
        Self::from_be_bytes(bytes)
    }

    /// Whether this is the zero element.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl Serialize for FieldElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for FieldElement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FieldElement({})", self.to_hex())
    }
}

impl std::fmt::Display for FieldElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Encode 32 bytes as lowercase hex.
fn bytes_to_hex(bytes: &[u8; 32]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
