//! **wayfront-core** — Node handles and pooled search-node storage.
//!
//! This crate provides the foundational types used across the *wayfront*
//! workspace: the opaque [`NodeId`] handle, the per-node search record
//! [`SearchNode`] (F/G scores, parent link, visit bookkeeping), and the
//! [`NodePool`] arena that owns all node records so that queue structures
//! built on top of them only ever hold references, never lifetimes.

pub mod node;
pub mod pool;

pub use node::{NodeId, SearchNode};
pub use pool::NodePool;
