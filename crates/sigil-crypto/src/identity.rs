//! # Identity Secrets — Trapdoor and Nullifier Seed
//!
//! An `IdentitySecret` is the per-user secret pair from which everything
//! public is derived. The commitment is what groups store; the nullifier
//! hash is what submission consumers deduplicate on.
//!
//! ## Security Invariant
//!
//! The secret never appears in logs, `Debug` output, or serialized
//! payloads. Persistence goes through `to_secret_string`, an explicit
//! opt-in the caller stores wherever its environment keeps secrets. The
//! type deliberately does not implement `Serialize`.

use rand::rngs::OsRng;
use rand::RngCore;
use sigil_core::FieldElement;
use thiserror::Error;

use crate::context::ContextId;
use crate::hash::{hash_to_field, DOMAIN_COMMITMENT, DOMAIN_NULLIFIER};

/// Errors arising from identity handling.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// A persisted secret string did not match the `trapdoor.seed` form.
    #[error("malformed identity secret: {0}")]
    MalformedSecret(String),
}

/// A user's secret identity: a trapdoor and a nullifier seed.
///
/// Both halves are uniformly sampled field elements. The trapdoor binds
/// the commitment; the seed binds per-context nullifier hashes.
#[derive(Clone, PartialEq, Eq)]
pub struct IdentitySecret {
    trapdoor: FieldElement,
    nullifier_seed: FieldElement,
}

impl IdentitySecret {
    /// Sample a fresh identity from the operating system RNG.
    pub fn generate() -> Self {
        Self {
            trapdoor: random_element(),
            nullifier_seed: random_element(),
        }
    }

    /// The public commitment stored in group membership sets.
    pub fn commitment(&self) -> FieldElement {
        hash_to_field(
            DOMAIN_COMMITMENT,
            &[&self.trapdoor.to_be_bytes(), &self.nullifier_seed.to_be_bytes()],
        )
    }

    /// The nullifier hash for a given context.
    ///
    /// Deterministic per identity and context, and not invertible to the
    /// seed. Two submissions by the same identity under the same context
    /// produce the same value.
    pub fn nullifier_hash(&self, context: &ContextId) -> FieldElement {
        hash_to_field(
            DOMAIN_NULLIFIER,
            &[
                &context.element().to_be_bytes(),
                &self.nullifier_seed.to_be_bytes(),
            ],
        )
    }

    /// Render the secret as an opaque `trapdoor.seed` hex string for
    /// persistence by the caller.
    pub fn to_secret_string(&self) -> String {
        format!("{}.{}", self.trapdoor.to_hex(), self.nullifier_seed.to_hex())
    }

    /// Restore an identity from a persisted secret string.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::MalformedSecret` when the string is not two
    /// dot-separated field elements in hex.
    pub fn from_secret_string(s: &str) -> Result<Self, IdentityError> {
        let (trapdoor_hex, seed_hex) = s
            .split_once('.')
            .ok_or_else(|| IdentityError::MalformedSecret("missing '.' separator".into()))?;
        let trapdoor = FieldElement::from_hex(trapdoor_hex)
            .map_err(|e| IdentityError::MalformedSecret(format!("trapdoor: {e}")))?;
        let nullifier_seed = FieldElement::from_hex(seed_hex)
            .map_err(|e| IdentityError::MalformedSecret(format!("nullifier seed: {e}")))?;
        Ok(Self {
            trapdoor,
            nullifier_seed,
        })
    }
}

// Redacted: secrets must not leak through Debug formatting.
impl std::fmt::Debug for IdentitySecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentitySecret")
            .field("trapdoor", &"<redacted>")
            .field("nullifier_seed", &"<redacted>")
            .finish()
    }
}

/// Sample a uniformly distributed field element from OS randomness.
fn random_element() -> FieldElement {
    let mut buf = [0u8; 32];
    OsRng.fill_bytes(&mut buf);
    FieldElement::from_hash(buf)
}
