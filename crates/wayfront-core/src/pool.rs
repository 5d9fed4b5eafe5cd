//! [`NodePool`]: a flat arena of [`SearchNode`] records.

use std::ops::{Index, IndexMut};

use crate::node::{NodeId, SearchNode};

/// A flat arena of search nodes addressed by [`NodeId`].
///
/// The pool owns every node record for a graph (one per graph node) and is
/// reused across successive searches: instead of clearing all records
/// between runs, [`begin_search`](NodePool::begin_search) bumps a generation
/// counter and stale records are lazily reinitialised on first touch. After
/// the first search over a given graph size, no allocation occurs.
pub struct NodePool {
    nodes: Vec<SearchNode>,
    generation: u32,
}

impl NodePool {
    /// Create a pool with `len` node records, one per graph node.
    pub fn new(len: usize) -> Self {
        Self {
            nodes: vec![SearchNode::default(); len],
            generation: 0,
        }
    }

    /// Number of node records in the pool.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the pool holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The current search generation.
    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Resize the pool for a graph of `len` nodes.
    ///
    /// Shrinking (or keeping the size) preserves the existing allocation and
    /// only bumps the generation so stale records are ignored; growing
    /// reallocates and resets every record.
    pub fn resize(&mut self, len: usize) {
        if len <= self.nodes.len() {
            self.generation = self.generation.wrapping_add(1);
            return;
        }
        self.nodes.clear();
        self.nodes.resize(len, SearchNode::default());
        self.generation = 0;
    }

    /// Start a new search: bump the generation and return it.
    ///
    /// Records from earlier searches keep their bytes but compare unequal on
    /// `generation`, so callers treat them as untouched.
    pub fn begin_search(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Fetch a record, or `None` if the handle is the sentinel or out of range.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        if id.is_none() {
            return None;
        }
        self.nodes.get(id.index())
    }

    /// Mutable variant of [`get`](NodePool::get).
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SearchNode> {
        if id.is_none() {
            return None;
        }
        self.nodes.get_mut(id.index())
    }

    /// Touch a record for the current generation, resetting it if it was
    /// last written by an earlier search. Returns whether it was stale.
    ///
    /// # Panics
    ///
    /// Panics if `id` is the [`NodeId::NONE`] sentinel or out of range;
    /// use [`get_mut`](NodePool::get_mut) for fallible access.
    pub fn visit(&mut self, id: NodeId) -> bool {
        let generation = self.generation;
        let node = &mut self.nodes[id.index()];
        if node.generation == generation {
            return false;
        }
        *node = SearchNode {
            generation,
            ..SearchNode::default()
        };
        true
    }
}

impl Index<NodeId> for NodePool {
    type Output = SearchNode;

    #[inline]
    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }
}

impl IndexMut<NodeId> for NodePool {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.index()]
    }
}
