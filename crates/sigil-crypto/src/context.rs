//! # Context Identifiers — External Nullifiers
//!
//! A `ContextId` names the scope a signal is submitted under (for example
//! a group identifier). The nullifier hash is derived from the identity's
//! secret seed and the context element, so one identity can submit exactly
//! once per context without being linkable across contexts.
//!
//! The human-readable label is hashed into the field rather than embedded,
//! so context names are never length-limited.

use serde::{Deserialize, Serialize};
use sigil_core::FieldElement;

use crate::hash::{hash_to_field, DOMAIN_CONTEXT};

/// An external nullifier: a context label and its field element.
///
/// Equality and hashing are on the element; the label is display metadata
/// and may be absent for identifiers recovered from a transport payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextId {
    label: Option<String>,
    element: FieldElement,
}

impl ContextId {
    /// Derive a context identifier from a human-readable label.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let element = hash_to_field(DOMAIN_CONTEXT, &[label.as_bytes()]);
        Self {
            label: Some(label),
            element,
        }
    }

    /// Reconstruct a context identifier from its element alone, as when
    /// unpacking a transport payload. The label is unknown.
    pub fn from_element(element: FieldElement) -> Self {
        Self {
            label: None,
            element,
        }
    }

    /// The field element used in derivations and payloads.
    pub fn element(&self) -> &FieldElement {
        &self.element
    }

    /// The human-readable label, when known.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl PartialEq for ContextId {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element
    }
}

impl Eq for ContextId {}

impl std::hash::Hash for ContextId {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.element.hash(state);
    }
}

impl std::fmt::Display for ContextId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.label {
            Some(label) => write!(f, "context:{label}"),
            None => write!(f, "context:{}", self.element),
        }
    }
}
