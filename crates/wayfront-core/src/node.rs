//! Node handles and per-node search records: [`NodeId`] and [`SearchNode`].

use std::fmt;

// ---------------------------------------------------------------------------
// NodeId
// ---------------------------------------------------------------------------

/// An opaque handle to a search node owned by a [`NodePool`](crate::NodePool).
///
/// Handles are plain indices and are cheap to copy. The all-ones bit pattern
/// is reserved as [`NodeId::NONE`], the "no node" sentinel used for parent
/// links of search roots and for rejecting invalid queue insertions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(u32);

impl NodeId {
    /// The "no node" sentinel.
    pub const NONE: Self = Self(u32::MAX);

    /// Create a handle from a pool index.
    ///
    /// # Panics
    ///
    /// Panics if `index` collides with the [`NONE`](Self::NONE) sentinel.
    #[inline]
    pub fn new(index: usize) -> Self {
        assert!(index < u32::MAX as usize, "node index {index} out of range");
        Self(index as u32)
    }

    /// The pool index this handle refers to.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this is the [`NONE`](Self::NONE) sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Whether this handle refers to an actual node.
    #[inline]
    pub const fn is_some(self) -> bool {
        !self.is_none()
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "#none")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

// ---------------------------------------------------------------------------
// SearchNode
// ---------------------------------------------------------------------------

/// Per-node state for a priority-ordered graph search.
///
/// The node owns its own mutable scores: `f` is the total cost estimate
/// (accumulated cost plus heuristic) and `g` the accumulated cost from the
/// search origin. Queue structures read these at insertion time; a caller
/// that mutates them for already-queued nodes is responsible for restoring
/// queue order afterwards (see `Frontier::rebuild` in *wayfront-frontier*).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchNode {
    /// Total cost estimate ("F score"). Lower is better.
    pub f: u32,
    /// Accumulated cost from the origin ("G score").
    pub g: u32,
    /// The node this one was reached from, or [`NodeId::NONE`] for roots.
    pub parent: NodeId,
    /// Search generation this record was last touched in.
    pub generation: u32,
    /// Whether the node is currently on the open list.
    pub open: bool,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            f: 0,
            g: 0,
            parent: NodeId::NONE,
            generation: 0,
            open: false,
        }
    }
}
