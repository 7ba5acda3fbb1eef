//! # Prover and Verifier Traits
//!
//! Defines the abstract seam between the submission flow and the proving
//! backend. The transparent reference backend and any real zero-knowledge
//! backend (Groth16 over a Semaphore-style circuit, say) are
//! interchangeable here.
//!
//! ## Security Invariant
//!
//! Both traits require `Send + Sync` so backends can be shared across
//! threads. Proving and verification are pure functions of their inputs
//! with no side effects.

use sigil_core::FieldElement;
use thiserror::Error;

use crate::request::ProofRequest;

/// Error during proof generation.
#[derive(Debug, Error)]
pub enum ProveError {
    /// The identity's commitment is not in the group snapshot.
    #[error("identity commitment is not a member of the group")]
    NotAMember,
    /// The witness is inconsistent with the request.
    #[error("witness error: {0}")]
    Witness(String),
    /// Internal backend failure.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Error during proof verification.
///
/// A proof that simply does not check out is `Ok(false)`, not an error;
/// errors are reserved for blobs the backend cannot interpret at all.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The proof blob could not be decoded.
    #[error("malformed proof blob: {0}")]
    Malformed(String),
}

/// What a prover returns: the opaque blob plus the public statement
/// values it computed from the request.
#[derive(Debug, Clone)]
pub struct ProverOutput {
    pub proof: Vec<u8>,
    pub root: FieldElement,
    pub nullifier_hash: FieldElement,
}

/// The public inputs a proof commits to.
///
/// Exactly these four elements are bound: a proof is valid only for this
/// root, nullifier hash, signal, and context together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicInputs {
    pub root: FieldElement,
    pub nullifier_hash: FieldElement,
    pub signal: FieldElement,
    pub context: FieldElement,
}

/// A proving backend.
pub trait Prover: Send + Sync {
    /// Generate a proof for a dispatched request.
    fn prove(&self, request: &ProofRequest) -> Result<ProverOutput, ProveError>;
}

/// A verification backend.
pub trait Verifier: Send + Sync {
    /// Check a proof blob against the public inputs.
    fn verify(&self, proof: &[u8], public: &PublicInputs) -> Result<bool, VerifyError>;
}
