//! # Group Commitment — Fixed-Depth Merkle Tree
//!
//! A `Group` is an ordered set of identity commitments folded into a
//! single root via a fixed-depth binary Merkle tree. Absent leaves are
//! padded with the zero sentinel, so the root depends only on the depth
//! and the ordered member list.
//!
//! ## Security Invariant
//!
//! Node hashing is domain-separated from every other derivation in the
//! stack, and the left/right order of children is preserved. A reordered
//! member list produces a different root.

use serde::{Deserialize, Serialize};
use sigil_core::FieldElement;
use thiserror::Error;

use crate::hash::{hash_to_field, DOMAIN_NODE};

/// Maximum supported tree depth.
pub const MAX_DEPTH: u8 = 32;

/// Errors arising from group construction and witness extraction.
#[derive(Debug, Error)]
pub enum GroupError {
    /// More members than the fixed depth can hold.
    #[error("group capacity exceeded: {members} members do not fit in a depth-{depth} tree (capacity {capacity})")]
    CapacityExceeded {
        members: usize,
        depth: u8,
        capacity: u64,
    },
    /// Depth outside `1..=MAX_DEPTH`.
    #[error("tree depth {0} out of range (must be 1..={MAX_DEPTH})")]
    DepthOutOfRange(u8),
    /// Leaf index beyond the member list.
    #[error("leaf index {index} out of range for group of {len} members")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Which side of the parent a path sibling sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathSide {
    Left,
    Right,
}

/// One level of an inclusion path: the sibling hash and its side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    pub side: PathSide,
    pub hash: FieldElement,
}

/// A leaf-to-root inclusion path with exactly `depth` steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusionPath {
    leaf: FieldElement,
    steps: Vec<PathStep>,
}

impl InclusionPath {
    /// Assemble a path from a leaf and its sibling steps, as when
    /// decoding a proof blob. Whether it folds to any particular root is
    /// the caller's question.
    pub fn new(leaf: FieldElement, steps: Vec<PathStep>) -> Self {
        Self { leaf, steps }
    }

    /// The leaf this path authenticates.
    pub fn leaf(&self) -> &FieldElement {
        &self.leaf
    }

    /// The sibling steps, leaf level first.
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Fold the path from the leaf up to a root.
    pub fn fold(&self) -> FieldElement {
        self.steps.iter().fold(self.leaf, |acc, step| match step.side {
            PathSide::Left => hash_node(&step.hash, &acc),
            PathSide::Right => hash_node(&acc, &step.hash),
        })
    }
}

/// An ordered commitment set under a fixed-depth Merkle root.
///
/// Immutable once built. Membership changes are expressed by building a
/// new group from the updated member list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    members: Vec<FieldElement>,
    depth: u8,
    root: FieldElement,
}

impl Group {
    /// Build a group from an ordered member list at the given depth.
    ///
    /// An empty member list is valid and yields the all-zero-sentinel
    /// root for that depth.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::DepthOutOfRange` for depths outside
    /// `1..=MAX_DEPTH` and `GroupError::CapacityExceeded` when the member
    /// list does not fit.
    pub fn build(members: Vec<FieldElement>, depth: u8) -> Result<Self, GroupError> {
        if depth == 0 || depth > MAX_DEPTH {
            return Err(GroupError::DepthOutOfRange(depth));
        }
        let capacity = capacity_for(depth);
        if members.len() as u64 > capacity {
            return Err(GroupError::CapacityExceeded {
                members: members.len(),
                depth,
                capacity,
            });
        }
        let root = compute_root(&members, depth);
        Ok(Self {
            members,
            depth,
            root,
        })
    }

    /// The Merkle root committing to the member set.
    pub fn root(&self) -> &FieldElement {
        &self.root
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn members(&self) -> &[FieldElement] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Leaf capacity at this group's depth.
    pub fn capacity(&self) -> u64 {
        capacity_for(self.depth)
    }

    /// Position of a commitment in the member list, if present.
    pub fn member_index(&self, commitment: &FieldElement) -> Option<usize> {
        self.members.iter().position(|m| m == commitment)
    }

    /// Extract the inclusion path for the leaf at `index`.
    ///
    /// The path has exactly `depth` steps; folding it reproduces the
    /// group root.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::IndexOutOfRange` when `index` is past the
    /// member list.
    pub fn inclusion_path(&self, index: usize) -> Result<InclusionPath, GroupError> {
        if index >= self.members.len() {
            return Err(GroupError::IndexOutOfRange {
                index,
                len: self.members.len(),
            });
        }
        let zeros = zero_subtrees(self.depth);
        let mut level: Vec<FieldElement> = self.members.clone();
        let mut idx = index;
        let mut steps = Vec::with_capacity(self.depth as usize);
        for zero in zeros.iter().take(self.depth as usize) {
            let sib_idx = idx ^ 1;
            let sibling = level.get(sib_idx).copied().unwrap_or(*zero);
            let side = if sib_idx < idx {
                PathSide::Left
            } else {
                PathSide::Right
            };
            steps.push(PathStep {
                side,
                hash: sibling,
            });
            level = fold_level(&level, *zero);
            idx /= 2;
        }
        Ok(InclusionPath {
            leaf: self.members[index],
            steps,
        })
    }

    /// Check an inclusion path against this group's root.
    pub fn verify_inclusion(&self, path: &InclusionPath) -> bool {
        path.steps.len() == self.depth as usize && path.fold() == self.root
    }
}

fn capacity_for(depth: u8) -> u64 {
    1u64 << depth
}

/// Hash two child nodes into their parent.
fn hash_node(left: &FieldElement, right: &FieldElement) -> FieldElement {
    hash_to_field(DOMAIN_NODE, &[&left.to_be_bytes(), &right.to_be_bytes()])
}

/// Roots of all-zero subtrees by level: `zeros[0]` is the leaf sentinel,
/// `zeros[l]` the root of a depth-`l` empty subtree.
fn zero_subtrees(depth: u8) -> Vec<FieldElement> {
    let mut zeros = Vec::with_capacity(depth as usize + 1);
    zeros.push(FieldElement::ZERO);
    for level in 0..depth as usize {
        let z = zeros[level];
        zeros.push(hash_node(&z, &z));
    }
    zeros
}

/// Fold one tree level into the next, padding odd right siblings with the
/// level's zero-subtree root.
fn fold_level(level: &[FieldElement], zero: FieldElement) -> Vec<FieldElement> {
    level
        .chunks(2)
        .map(|pair| {
            let left = pair[0];
            let right = pair.get(1).copied().unwrap_or(zero);
            hash_node(&left, &right)
        })
        .collect()
}

fn compute_root(members: &[FieldElement], depth: u8) -> FieldElement {
    let zeros = zero_subtrees(depth);
    let mut level: Vec<FieldElement> = members.to_vec();
    for zero in zeros.iter().take(depth as usize) {
        level = fold_level(&level, *zero);
    }
    level.first().copied().unwrap_or(zeros[depth as usize])
}
