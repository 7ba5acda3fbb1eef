//! # Signal Codec — UTF-8 to Field Element
//!
//! Encodes short UTF-8 content into a single field element by
//! right-aligning its bytes in a 32-byte big-endian buffer. Content
//! longer than 31 bytes is a hard error rather than silent truncation,
//! since a truncated signal would still prove and verify while carrying
//! different content than the user wrote.

use serde::{Deserialize, Serialize};
use sigil_core::FieldElement;
use thiserror::Error;

/// Maximum encodable signal length in bytes.
///
/// 31 content bytes leave the top buffer byte zero, which keeps every
/// encoded value strictly below the field modulus.
pub const MAX_SIGNAL_BYTES: usize = 31;

/// Errors arising from signal encoding.
#[derive(Debug, Error)]
pub enum SignalError {
    /// Content longer than `MAX_SIGNAL_BYTES` when UTF-8 encoded.
    #[error("signal content is {len} bytes, exceeding the {MAX_SIGNAL_BYTES}-byte limit")]
    EncodingOverflow { len: usize },
}

/// A signal: short content bound into the proof as a field element.
///
/// Equality is on the element. The original text is retained when known
/// so CLIs and logs can show what was actually signed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    element: FieldElement,
    text: Option<String>,
}

impl Signal {
    /// Encode UTF-8 content into a signal.
    ///
    /// # Errors
    ///
    /// Returns `SignalError::EncodingOverflow` when the content exceeds
    /// `MAX_SIGNAL_BYTES` bytes. Empty content is accepted here; whether
    /// an empty signal may be submitted is a request-level policy.
    pub fn encode(text: impl Into<String>) -> Result<Self, SignalError> {
        let text = text.into();
        let bytes = text.as_bytes();
        let len = bytes.len();
        if len > MAX_SIGNAL_BYTES {
            return Err(SignalError::EncodingOverflow { len });
        }
        let mut buf = [0u8; 32];
        buf[32 - len..].copy_from_slice(bytes);
        // The top byte is zero, so the value is below the modulus.
        let element = FieldElement::from_be_bytes(buf)
            .map_err(|_| SignalError::EncodingOverflow { len })?;
        Ok(Self {
            element,
            text: Some(text),
        })
    }

    /// Reconstruct a signal from its element, as when unpacking a
    /// transport payload. The text is recovered on a best-effort basis.
    pub fn from_element(element: FieldElement) -> Self {
        Self {
            text: decode_element(&element),
            element,
        }
    }

    /// The field element bound into the proof.
    pub fn element(&self) -> &FieldElement {
        &self.element
    }

    /// The original text, when known or recoverable.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl PartialEq for Signal {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element
    }
}

impl Eq for Signal {}

/// Recover UTF-8 text from an encoded element, if the stripped bytes
/// form valid UTF-8.
fn decode_element(element: &FieldElement) -> Option<String> {
    let bytes = element.to_be_bytes();
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    String::from_utf8(bytes[start..].to_vec()).ok()
}
