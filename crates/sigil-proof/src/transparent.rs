//! # Transparent Reference Backend
//!
//! A fully functional proving backend whose proofs bind every public
//! input but hide nothing: the blob reveals the prover's commitment and
//! membership path. It exists so the rest of the stack can be exercised
//! end to end behind the same trait seam a zero-knowledge backend would
//! occupy.
//!
//! The blob is a fixed binary layout rather than JSON, keeping a
//! depth-32 proof comfortably inside single-QR transport capacity.
//!
//! ## Security Invariant
//!
//! NOT anonymous. Never deploy this backend where the submitter's
//! identity must stay hidden; substitute a real zero-knowledge backend
//! at the `Prover`/`Verifier` seam.

use rand::rngs::OsRng;
use rand::RngCore;
use sigil_core::FieldElement;
use sigil_crypto::hash::{hash_to_field, DOMAIN_BINDING};
use sigil_crypto::{InclusionPath, PathSide, PathStep, MAX_DEPTH};

use crate::request::ProofRequest;
use crate::traits::{ProveError, Prover, ProverOutput, PublicInputs, VerifyError, Verifier};

// Blob layout: commitment(32) | nonce(32) | tag(32) | depth(1) | steps,
// each step side(1) | sibling(32).
const HEADER_BYTES: usize = 97;
const STEP_BYTES: usize = 33;

/// The decoded form of a transparent proof blob.
#[derive(Debug, Clone)]
struct TransparentProof {
    commitment: FieldElement,
    path: InclusionPath,
    nonce: FieldElement,
    tag: FieldElement,
}

impl TransparentProof {
    fn encode(&self) -> Vec<u8> {
        let steps = self.path.steps();
        let mut out = Vec::with_capacity(HEADER_BYTES + steps.len() * STEP_BYTES);
        out.extend_from_slice(&self.commitment.to_be_bytes());
        out.extend_from_slice(&self.nonce.to_be_bytes());
        out.extend_from_slice(&self.tag.to_be_bytes());
        out.push(steps.len() as u8);
        for step in steps {
            out.push(match step.side {
                PathSide::Left => 0,
                PathSide::Right => 1,
            });
            out.extend_from_slice(&step.hash.to_be_bytes());
        }
        out
    }

    fn decode(bytes: &[u8]) -> Result<Self, VerifyError> {
        if bytes.len() < HEADER_BYTES {
            return Err(VerifyError::Malformed(format!(
                "blob is {} bytes, shorter than the {HEADER_BYTES}-byte header",
                bytes.len()
            )));
        }
        let commitment = read_element(bytes, 0)?;
        let nonce = read_element(bytes, 32)?;
        let tag = read_element(bytes, 64)?;
        let depth = bytes[96];
        if depth == 0 || depth > MAX_DEPTH {
            return Err(VerifyError::Malformed(format!("depth {depth} out of range")));
        }
        let expected = HEADER_BYTES + depth as usize * STEP_BYTES;
        if bytes.len() != expected {
            return Err(VerifyError::Malformed(format!(
                "blob is {} bytes, expected {expected} for depth {depth}",
                bytes.len()
            )));
        }
        let mut steps = Vec::with_capacity(depth as usize);
        for level in 0..depth as usize {
            let offset = HEADER_BYTES + level * STEP_BYTES;
            let side = match bytes[offset] {
                0 => PathSide::Left,
                1 => PathSide::Right,
                other => {
                    return Err(VerifyError::Malformed(format!(
                        "invalid side byte {other:#04x} at step {level}"
                    )))
                }
            };
            let hash = read_element(bytes, offset + 1)?;
            steps.push(PathStep { side, hash });
        }
        Ok(Self {
            commitment,
            path: InclusionPath::new(commitment, steps),
            nonce,
            tag,
        })
    }
}

fn read_element(bytes: &[u8], offset: usize) -> Result<FieldElement, VerifyError> {
    let arr: [u8; 32] = bytes[offset..offset + 32]
        .try_into()
        .map_err(|_| VerifyError::Malformed("truncated field element".into()))?;
    FieldElement::from_be_bytes(arr)
        .map_err(|e| VerifyError::Malformed(format!("element at offset {offset}: {e}")))
}

/// The transparent backend. Stateless; one value serves as both prover
/// and verifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransparentProver;

impl TransparentProver {
    pub fn new() -> Self {
        Self
    }
}

/// Binding tag over the commitment, all four public inputs, and the nonce.
fn binding_tag(
    commitment: &FieldElement,
    public: &PublicInputs,
    nonce: &FieldElement,
) -> FieldElement {
    hash_to_field(
        DOMAIN_BINDING,
        &[
            &commitment.to_be_bytes(),
            &public.root.to_be_bytes(),
            &public.nullifier_hash.to_be_bytes(),
            &public.signal.to_be_bytes(),
            &public.context.to_be_bytes(),
            &nonce.to_be_bytes(),
        ],
    )
}

impl Prover for TransparentProver {
    fn prove(&self, request: &ProofRequest) -> Result<ProverOutput, ProveError> {
        let group = request.group();
        let commitment = request.identity().commitment();
        let index = group.member_index(&commitment).ok_or(ProveError::NotAMember)?;
        let path = group
            .inclusion_path(index)
            .map_err(|e| ProveError::Witness(e.to_string()))?;
        let root = *group.root();
        let nullifier_hash = request.identity().nullifier_hash(request.context());
        let public = PublicInputs {
            root,
            nullifier_hash,
            signal: *request.signal().element(),
            context: *request.context().element(),
        };
        let mut buf = [0u8; 32];
        OsRng.fill_bytes(&mut buf);
        let nonce = FieldElement::from_hash(buf);
        let proof = TransparentProof {
            commitment,
            path,
            nonce,
            tag: binding_tag(&commitment, &public, &nonce),
        };
        Ok(ProverOutput {
            proof: proof.encode(),
            root,
            nullifier_hash,
        })
    }
}

impl Verifier for TransparentProver {
    fn verify(&self, proof: &[u8], public: &PublicInputs) -> Result<bool, VerifyError> {
        let proof = TransparentProof::decode(proof)?;
        if proof.path.fold() != public.root {
            return Ok(false);
        }
        Ok(binding_tag(&proof.commitment, public, &proof.nonce) == proof.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigil_crypto::{ContextId, Group, IdentitySecret, Signal};

    fn setup() -> (IdentitySecret, ProofRequest) {
        let identity = IdentitySecret::generate();
        let bystander = IdentitySecret::generate();
        let group =
            Group::build(vec![identity.commitment(), bystander.commitment()], 20).unwrap();
        let request = ProofRequest::new(
            identity.clone(),
            group,
            Signal::encode("yes").unwrap(),
            ContextId::new("poll-1"),
        );
        (identity, request)
    }

    fn public_inputs(request: &ProofRequest, output: &ProverOutput) -> PublicInputs {
        PublicInputs {
            root: output.root,
            nullifier_hash: output.nullifier_hash,
            signal: *request.signal().element(),
            context: *request.context().element(),
        }
    }

    #[test]
    fn test_prove_verify_roundtrip() {
        let (_, request) = setup();
        let backend = TransparentProver::new();
        let output = backend.prove(&request).unwrap();
        let public = public_inputs(&request, &output);
        assert!(backend.verify(&output.proof, &public).unwrap());
    }

    #[test]
    fn test_output_matches_request_snapshot() {
        let (identity, request) = setup();
        let output = TransparentProver::new().prove(&request).unwrap();
        assert_eq!(output.root, *request.group().root());
        assert_eq!(
            output.nullifier_hash,
            identity.nullifier_hash(request.context())
        );
    }

    #[test]
    fn test_blob_size_is_fixed_for_depth() {
        let (_, request) = setup();
        let output = TransparentProver::new().prove(&request).unwrap();
        assert_eq!(output.proof.len(), HEADER_BYTES + 20 * STEP_BYTES);
    }

    #[test]
    fn test_corrupted_public_inputs_rejected() {
        let (_, request) = setup();
        let backend = TransparentProver::new();
        let output = backend.prove(&request).unwrap();
        let public = public_inputs(&request, &output);

        let other = Signal::encode("no").unwrap();
        let mut bad = public;
        bad.signal = *other.element();
        assert!(!backend.verify(&output.proof, &bad).unwrap());

        let mut bad = public;
        bad.nullifier_hash = *ContextId::new("x").element();
        assert!(!backend.verify(&output.proof, &bad).unwrap());

        let mut bad = public;
        bad.context = *ContextId::new("poll-2").element();
        assert!(!backend.verify(&output.proof, &bad).unwrap());

        let mut bad = public;
        bad.root = FieldElement::ZERO;
        assert!(!backend.verify(&output.proof, &bad).unwrap());
    }

    #[test]
    fn test_tampered_blob_rejected() {
        let (_, request) = setup();
        let backend = TransparentProver::new();
        let mut output = backend.prove(&request).unwrap();
        let public = public_inputs(&request, &output.clone());
        // Flip a bit in the tag.
        output.proof[64 + 31] ^= 0x01;
        assert!(!backend.verify(&output.proof, &public).unwrap());
    }

    #[test]
    fn test_non_member_rejected() {
        let (_, request) = setup();
        let outsider = IdentitySecret::generate();
        let foreign = ProofRequest::new(
            outsider,
            request.group().clone(),
            Signal::encode("yes").unwrap(),
            ContextId::new("poll-1"),
        );
        assert!(matches!(
            TransparentProver::new().prove(&foreign),
            Err(ProveError::NotAMember)
        ));
    }

    #[test]
    fn test_garbage_blob_is_malformed() {
        let (_, request) = setup();
        let backend = TransparentProver::new();
        let output = backend.prove(&request).unwrap();
        let public = public_inputs(&request, &output);
        assert!(matches!(
            backend.verify(b"too short", &public),
            Err(VerifyError::Malformed(_))
        ));
        let wrong_length = vec![0u8; HEADER_BYTES + 7];
        assert!(matches!(
            backend.verify(&wrong_length, &public),
            Err(VerifyError::Malformed(_))
        ));
    }

    #[test]
    fn test_proofs_are_randomized_but_statement_is_stable() {
        let (_, request) = setup();
        let backend = TransparentProver::new();
        let a = backend.prove(&request).unwrap();
        let b = backend.prove(&request).unwrap();
        // Witness-level nondeterminism, public-statement determinism.
        assert_ne!(a.proof, b.proof);
        assert_eq!(a.nullifier_hash, b.nullifier_hash);
        assert_eq!(a.root, b.root);
        let public = public_inputs(&request, &a);
        assert!(backend.verify(&a.proof, &public).unwrap());
        assert!(backend.verify(&b.proof, &public).unwrap());
    }
}
