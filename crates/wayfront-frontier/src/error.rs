//! Error conditions reported by [`Frontier`](crate::Frontier) operations.

use crate::frontier::MAX_CAPACITY;

/// Recoverable failure modes of frontier operations.
///
/// Everything else (popping from an empty frontier, indexing a dead entry)
/// is a caller logic bug and panics instead of returning an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FrontierError {
    /// The [`NodeId::NONE`](crate::NodeId::NONE) sentinel was queued.
    #[error("cannot queue the none node handle")]
    NullNode,

    /// Growing would push capacity past the hard ceiling.
    ///
    /// This is an early-warning signal, not an allocation failure: a
    /// frontier this large almost always means the driving search is stuck
    /// expanding a cyclic or disconnected graph. Retrying will not help.
    #[error(
        "frontier growth to {requested} entries exceeds the {max} ceiling; \
         the search is likely expanding without bound",
        max = MAX_CAPACITY
    )]
    CapacityExceeded {
        /// Capacity the rejected growth step asked for.
        requested: usize,
    },
}
