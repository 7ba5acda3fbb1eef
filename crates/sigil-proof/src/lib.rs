//! # sigil-proof — Proof Requests and Backends
//!
//! Ties the cryptographic primitives together into the submission flow:
//!
//! - **Traits** (`traits.rs`): the `Prover`/`Verifier` seam. Backends are
//!   injected by the caller; nothing in this crate reaches for ambient
//!   state.
//! - **Transparent backend** (`transparent.rs`): a fully functional
//!   reference backend whose proofs bind all public inputs but hide
//!   nothing. Interchangeable with a real zero-knowledge backend at the
//!   trait seam.
//! - **Bundle** (`bundle.rs`): the self-contained verification artifact
//!   carrying the proof and its public inputs.
//! - **Request machine** (`request.rs`): the explicit lifecycle of one
//!   submission attempt, with a transition log and stale-completion
//!   protection.
//!
//! ## Crate Policy
//!
//! - All state is held by values the caller owns; no globals, no
//!   singletons.
//! - `unsafe` prohibited.

pub mod bundle;
pub mod request;
pub mod traits;
pub mod transparent;

pub use bundle::ProofBundle;
pub use request::{
    ProofRequest, ProofRequestMachine, RequestError, RequestId, RequestPhase, TransitionRecord,
};
pub use traits::{ProveError, Prover, ProverOutput, PublicInputs, VerifyError, Verifier};
pub use transparent::TransparentProver;
