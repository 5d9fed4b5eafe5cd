//! **wayfront-frontier** — the ordered frontier ("open list") for
//! budget-driven real-time graph search.
//!
//! A graph search discovers candidate nodes faster than it can finalise
//! them; the frontier is the structure that always hands back the candidate
//! with the lowest total cost estimate in O(log n). This crate provides
//! [`Frontier`], an array-backed n-ary min-heap specialised for that job:
//!
//! - **No steady-state allocation.** Storage grows amortised-doubling style
//!   and is reused across searches via [`Frontier::clear`]; after warm-up,
//!   push/pop never touch the allocator.
//! - **Bounded growth.** Growth past [`MAX_CAPACITY`] fails with
//!   [`FrontierError::CapacityExceeded`] instead of silently eating memory,
//!   because a frontier that large almost always means the driving search
//!   is expanding without bound.
//! - **Domain tie-break.** Entries order by F score, and among equal F the
//!   larger G score wins: a candidate that has already travelled further is
//!   presumptively closer to the goal, so expanding it first tends to
//!   shorten the search.
//! - **Retarget support.** When a moving target changes the heuristic term
//!   of already-queued entries, the caller rewrites their keys and calls
//!   [`Frontier::rebuild`] once; there is no per-entry decrease-key.
//!
//! Node payloads are [`NodeId`] handles into an externally-owned
//! [`NodePool`](wayfront_core::NodePool); the frontier orders references
//! and never owns node lifetimes.

mod error;
mod frontier;

pub use error::FrontierError;
pub use frontier::{Frontier, MAX_CAPACITY};
pub use wayfront_core::NodeId;
