//! # Proof Bundle
//!
//! The self-contained verification artifact: the opaque proof blob plus
//! the four public inputs it binds. A bundle carries everything a
//! consumer needs to verify, except trust in the root, which the
//! consumer must check against its own view of the group.

use serde::{Deserialize, Serialize};
use sigil_core::FieldElement;
use sigil_crypto::{ContextId, Signal};

use crate::traits::{PublicInputs, VerifyError, Verifier};

/// A generated proof with its public inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofBundle {
    /// Opaque backend-specific proof blob, hex-encoded on the wire.
    #[serde(with = "hex_blob")]
    pub proof: Vec<u8>,
    /// Root of the group the membership claim is against.
    pub root: FieldElement,
    /// Deduplication handle: deterministic per identity and context.
    pub nullifier_hash: FieldElement,
    /// The signal bound into the proof.
    pub signal: Signal,
    /// The context (external nullifier) the submission is scoped to.
    pub context: ContextId,
}

impl ProofBundle {
    /// The public inputs this bundle claims.
    pub fn public_inputs(&self) -> PublicInputs {
        PublicInputs {
            root: self.root,
            nullifier_hash: self.nullifier_hash,
            signal: *self.signal.element(),
            context: *self.context.element(),
        }
    }

    /// Verify the proof blob against the bundle's own public inputs.
    ///
    /// A passing check means the blob binds these inputs. It does not
    /// mean the root is one the consumer accepts.
    pub fn verify_with(&self, verifier: &dyn Verifier) -> Result<bool, VerifyError> {
        verifier.verify(&self.proof, &self.public_inputs())
    }
}

/// Hex serde for the opaque proof blob.
mod hex_blob {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
        hex.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let hex = String::deserialize(deserializer)?;
        if hex.len() % 2 != 0 {
            return Err(serde::de::Error::custom("odd-length hex string"));
        }
        (0..hex.len())
            .step_by(2)
            .map(|i| {
                u8::from_str_radix(&hex[i..i + 2], 16)
                    .map_err(|e| serde::de::Error::custom(format!("invalid hex: {e}")))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bundle() -> ProofBundle {
        ProofBundle {
            proof: vec![0x00, 0x7f, 0xff],
            root: FieldElement::ZERO,
            nullifier_hash: FieldElement::ZERO,
            signal: Signal::encode("yes").unwrap(),
            context: ContextId::new("poll-1"),
        }
    }

    #[test]
    fn test_json_roundtrip() {
        let bundle = sample_bundle();
        let json = serde_json::to_string(&bundle).unwrap();
        let back: ProofBundle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bundle);
    }

    #[test]
    fn test_proof_blob_serialized_as_hex() {
        let json = serde_json::to_value(sample_bundle()).unwrap();
        assert_eq!(json["proof"], "007fff");
    }

    #[test]
    fn test_bad_hex_rejected() {
        let json = serde_json::to_string(&sample_bundle())
            .unwrap()
            .replace("007fff", "007ffx");
        assert!(serde_json::from_str::<ProofBundle>(&json).is_err());
    }
}
