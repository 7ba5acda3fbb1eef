//! # Transport Payload — Canonical Wire Form
//!
//! The wire form of a proof bundle: a flat JSON object with the keys
//! `context`, `nullifier_hash`, `proof`, `root`, and `signal`, rendered
//! through RFC 8785 canonicalization so equal bundles pack to identical
//! bytes.
//!
//! Payloads are size-checked against the binary capacity of a single
//! version-40 QR code. The context and signal travel as bare field
//! elements; labels and original text stay on the producing side.

use serde::{Deserialize, Serialize};
use sigil_core::{CanonicalBytes, CanonicalizationError, FieldElement};
use sigil_crypto::{ContextId, Signal};
use sigil_proof::ProofBundle;
use thiserror::Error;

/// Binary capacity of a version-40 QR code at the lowest error
/// correction level.
pub const MAX_PAYLOAD_BYTES: usize = 2953;

/// Errors arising from payload packing and unpacking.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The payload bytes are not a well-formed wire object.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// The packed payload does not fit in a single QR code.
    #[error("payload is {bytes} bytes, exceeding the {limit}-byte transport limit")]
    CapacityExceeded { bytes: usize, limit: usize },

    /// Canonicalization of the wire object failed.
    #[error(transparent)]
    Canonicalization(#[from] CanonicalizationError),
}

/// The flat wire object. Key order on the wire is alphabetical, fixed
/// by canonicalization. Unknown fields are rejected so a corrupted
/// payload either fails to parse or fails verification.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct WirePayload {
    context: FieldElement,
    nullifier_hash: FieldElement,
    proof: String,
    root: FieldElement,
    signal: FieldElement,
}

/// Pack a proof bundle into canonical payload bytes.
///
/// # Errors
///
/// Returns `PayloadError::CapacityExceeded` when the canonical form does
/// not fit in `MAX_PAYLOAD_BYTES`.
pub fn pack(bundle: &ProofBundle) -> Result<Vec<u8>, PayloadError> {
    let wire = WirePayload {
        context: *bundle.context.element(),
        nullifier_hash: bundle.nullifier_hash,
        proof: encode_hex(&bundle.proof),
        root: bundle.root,
        signal: *bundle.signal.element(),
    };
    let canonical = CanonicalBytes::new(&wire)?;
    if canonical.len() > MAX_PAYLOAD_BYTES {
        return Err(PayloadError::CapacityExceeded {
            bytes: canonical.len(),
            limit: MAX_PAYLOAD_BYTES,
        });
    }
    Ok(canonical.into_bytes())
}

/// Unpack payload bytes into a proof bundle.
///
/// The context label and signal text are not carried on the wire; the
/// signal text is recovered from its element when the bytes decode as
/// UTF-8.
///
/// # Errors
///
/// Returns `PayloadError::MalformedPayload` for bytes that are not a
/// well-formed wire object, including out-of-range field elements and
/// invalid proof hex.
pub fn unpack(bytes: &[u8]) -> Result<ProofBundle, PayloadError> {
    if bytes.len() > MAX_PAYLOAD_BYTES {
        return Err(PayloadError::CapacityExceeded {
            bytes: bytes.len(),
            limit: MAX_PAYLOAD_BYTES,
        });
    }
    let wire: WirePayload = serde_json::from_slice(bytes)
        .map_err(|e| PayloadError::MalformedPayload(e.to_string()))?;
    let proof = decode_hex(&wire.proof)
        .map_err(|e| PayloadError::MalformedPayload(format!("proof field: {e}")))?;
    Ok(ProofBundle {
        proof,
        root: wire.root,
        nullifier_hash: wire.nullifier_hash,
        signal: Signal::from_element(wire.signal),
        context: ContextId::from_element(wire.context),
    })
}

fn encode_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn decode_hex(hex: &str) -> Result<Vec<u8>, String> {
    if hex.len() % 2 != 0 {
        return Err("odd-length hex string".into());
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string()))
        .collect()
}
