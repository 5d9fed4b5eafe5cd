//! [`Frontier`]: a fixed-fan-out, array-backed min-priority queue with
//! open-list semantics.

use wayfront_core::NodeId;

use crate::error::FrontierError;

/// Hard ceiling on frontier capacity: 2^18 entries.
///
/// A frontier this large almost always means the driving search is caught
/// in unbounded expansion, so growth past it is refused rather than allowed
/// to exhaust memory silently.
pub const MAX_CAPACITY: usize = 1 << 18;

/// Multiplier applied to capacity when the live region is exhausted.
const GROWTH_FACTOR: f64 = 2.0;

// ---------------------------------------------------------------------------
// Entry
// ---------------------------------------------------------------------------

/// A live heap slot: the two ordering keys plus the node they were read from.
///
/// Keys are copied out of the node at push time. The node stays externally
/// owned; the frontier only orders handles to it.
#[derive(Copy, Clone)]
struct Entry {
    f: u32,
    g: u32,
    node: NodeId,
}

impl Entry {
    const EMPTY: Self = Self {
        f: 0,
        g: 0,
        node: NodeId::NONE,
    };
}

/// The ordering policy, applied identically in push, pop, and rebuild.
///
/// Lower F wins. Among equal F the *larger* G wins: a candidate that has
/// already travelled further is presumptively closer to the goal.
#[inline]
fn better(a: &Entry, b: &Entry) -> bool {
    a.f < b.f || (a.f == b.f && a.g > b.g)
}

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// An open list: the discovered-but-not-yet-finalised nodes of a graph
/// search, ordered so the lowest total cost estimate pops first.
///
/// The heap is an implicit `D`-ary tree packed into a boxed slice; `D = 4`
/// is the tuned default. Slot `i` has its parent at `(i - 1) / D` and
/// children at `i * D + 1 ..= i * D + D`. Growth reallocates; nothing else
/// does, so steady-state push/pop after warm-up never touch the allocator.
///
/// Not safe for concurrent mutation. Each concurrently running search must
/// own its own instance.
pub struct Frontier<const D: usize = 4> {
    storage: Box<[Entry]>,
    count: usize,
    growths: usize,
}

impl<const D: usize> Frontier<D> {
    /// Create a frontier with room for `initial_capacity` entries.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            storage: vec![Entry::EMPTY; initial_capacity].into_boxed_slice(),
            count: 0,
            growths: 0,
        }
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no entries are queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Allocated entry capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Number of growth reallocations performed over this instance's life.
    ///
    /// Steady-state operation performs none; a rising value on a warm
    /// frontier is worth investigating.
    #[inline]
    pub fn growth_count(&self) -> usize {
        self.growths
    }

    /// The best queued node, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<NodeId> {
        if self.count == 0 {
            None
        } else {
            Some(self.storage[0].node)
        }
    }

    /// Queue `node` under the keys `f` (total cost estimate) and `g`
    /// (accumulated cost), O(log n).
    ///
    /// The keys must already be up to date on the node itself; the frontier
    /// copies them and never re-reads the node.
    ///
    /// # Errors
    ///
    /// [`FrontierError::NullNode`] if `node` is the [`NodeId::NONE`]
    /// sentinel, and [`FrontierError::CapacityExceeded`] if a required
    /// growth step would pass [`MAX_CAPACITY`]. On error the frontier is
    /// left exactly as it was.
    pub fn push(&mut self, node: NodeId, f: u32, g: u32) -> Result<(), FrontierError> {
        if node.is_none() {
            return Err(FrontierError::NullNode);
        }
        if self.count == self.storage.len() {
            self.grow()?;
        }
        self.storage[self.count] = Entry { f, g, node };
        self.sift_up(self.count);
        self.count += 1;
        Ok(())
    }

    /// Remove and return the best queued node, O(log n).
    ///
    /// # Panics
    ///
    /// Panics if the frontier is empty. That is a driver logic bug, not a
    /// runtime condition; check [`is_empty`](Frontier::is_empty) first.
    pub fn pop(&mut self) -> NodeId {
        assert!(self.count > 0, "pop on an empty frontier");
        self.count -= 1;
        let top = self.storage[0].node;
        self.storage[0] = self.storage[self.count];

        // Down-heap: walk the moved entry toward the leaves, swapping with
        // the most preferred live child until neither child is better.
        let mut i = 0;
        loop {
            let mut best = i;
            let first = i * D + 1;
            let last = usize::min(first + D, self.count);
            for child in first..last {
                if better(&self.storage[child], &self.storage[best]) {
                    best = child;
                }
            }
            if best == i {
                break;
            }
            self.storage.swap(i, best);
            i = best;
        }
        top
    }

    /// Restore heap order after queued entries had their primary keys
    /// rewritten in place, O(n log n).
    ///
    /// Needed when a heuristic-target change invalidates the F scores of
    /// entries already queued (see [`set_primary`](Frontier::set_primary)
    /// and [`reprioritize`](Frontier::reprioritize)); there is no per-entry
    /// decrease-key. Called once per retarget, never on the hot path.
    pub fn rebuild(&mut self) {
        for i in 1..self.count {
            self.sift_up(i);
        }
    }

    /// Drop all entries without releasing storage.
    ///
    /// Entries become logically absent but are not erased, so a frontier
    /// reused across many searches keeps its warmed-up capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.count = 0;
    }

    /// The node queued at live slot `index` (`0 .. len`).
    ///
    /// Slot order is heap order, not extraction order; this exists so a
    /// retargeting caller can enumerate queued nodes to re-derive their
    /// keys.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a live slot.
    #[inline]
    pub fn node_at(&self, index: usize) -> NodeId {
        assert!(index < self.count, "slot {index} is not live");
        self.storage[index].node
    }

    /// Overwrite the primary key of live slot `index`.
    ///
    /// Heap order is knowingly broken afterwards; call
    /// [`rebuild`](Frontier::rebuild) once all affected slots are rewritten.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a live slot.
    #[inline]
    pub fn set_primary(&mut self, index: usize, f: u32) {
        assert!(index < self.count, "slot {index} is not live");
        self.storage[index].f = f;
    }

    /// Rewrite every live entry's primary key and rebuild once.
    ///
    /// `score` receives the queued node and its current F score and returns
    /// the replacement. Convenience wrapper over the
    /// [`set_primary`](Frontier::set_primary) / [`rebuild`](Frontier::rebuild)
    /// retarget flow.
    pub fn reprioritize(&mut self, mut score: impl FnMut(NodeId, u32) -> u32) {
        for entry in &mut self.storage[..self.count] {
            entry.f = score(entry.node, entry.f);
        }
        self.rebuild();
    }

    /// Diagnostic: check the heap-order invariant over every live slot.
    ///
    /// # Panics
    ///
    /// Panics on the first slot found strictly better than its parent. Not
    /// invoked on production paths; meant for tests and debugging.
    pub fn validate(&self) {
        for i in 1..self.count {
            let parent = (i - 1) / D;
            assert!(
                !better(&self.storage[i], &self.storage[parent]),
                "heap order broken at slot {i} (parent {parent}): \
                 ({}, {}) outranks ({}, {})",
                self.storage[i].f,
                self.storage[i].g,
                self.storage[parent].f,
                self.storage[parent].g,
            );
        }
    }

    /// Up-heap: walk the entry at `from` toward the root while it is
    /// strictly better than its parent.
    fn sift_up(&mut self, from: usize) {
        let entry = self.storage[from];
        let mut i = from;
        while i != 0 {
            let parent = (i - 1) / D;
            if better(&entry, &self.storage[parent]) {
                self.storage[i] = self.storage[parent];
                self.storage[parent] = entry;
                i = parent;
            } else {
                break;
            }
        }
    }

    /// Reallocate for one growth step, or refuse past [`MAX_CAPACITY`].
    fn grow(&mut self) -> Result<(), FrontierError> {
        let capacity = self.storage.len();
        let scaled = (capacity as f64 * GROWTH_FACTOR).round() as usize;
        let requested = usize::max(capacity + 4, scaled);
        if requested > MAX_CAPACITY {
            log::warn!(
                "refusing frontier growth {capacity} -> {requested} \
                 (ceiling {MAX_CAPACITY}); is the search stuck?"
            );
            return Err(FrontierError::CapacityExceeded { requested });
        }

        let mut bigger = vec![Entry::EMPTY; requested].into_boxed_slice();
        bigger[..self.count].copy_from_slice(&self.storage[..self.count]);
        self.storage = bigger;
        self.growths += 1;
        log::debug!("frontier grew {capacity} -> {requested} entries");
        Ok(())
    }
}


#[cfg(test)]
mod search_tests {
    //! Drives the frontier through a small weighted grid search, the way a
    //! real pathfinding driver uses it together with a node pool.

    use wayfront_core::{NodeId, NodePool};

    use super::Frontier;

    const W: usize = 4;
    const H: usize = 4;

    /// `#` is a wall. Open cells cost 1 to enter.
    const MAP: &[u8] = b"\
..#.\
..#.\
..#.\
....";

    fn neighbors(i: usize, buf: &mut Vec<usize>) {
        buf.clear();
        let (x, y) = (i % W, i / W);
        if x > 0 {
            buf.push(i - 1);
        }
        if x + 1 < W {
            buf.push(i + 1);
        }
        if y > 0 {
            buf.push(i - W);
        }
        if y + 1 < H {
            buf.push(i + W);
        }
        buf.retain(|&n| MAP[n] != b'#');
    }

    fn manhattan(a: usize, b: usize) -> u32 {
        let (ax, ay) = ((a % W) as i64, (a / W) as i64);
        let (bx, by) = ((b % W) as i64, (b / W) as i64);
        ((ax - bx).abs() + (ay - by).abs()) as u32
    }

    /// A*: returns the accumulated cost of the cheapest path.
    fn search(pool: &mut NodePool, fr: &mut Frontier, start: usize, goal: usize) -> Option<u32> {
        pool.begin_search();
        fr.clear();

        let start_id = NodeId::new(start);
        pool.visit(start_id);
        pool[start_id].f = manhattan(start, goal);
        pool[start_id].open = true;
        fr.push(start_id, pool[start_id].f, 0).unwrap();

        let mut nbuf = Vec::with_capacity(4);
        while !fr.is_empty() {
            let current = fr.pop();
            if !pool[current].open {
                continue; // stale entry superseded by a cheaper relaxation
            }
            if current.index() == goal {
                return Some(pool[current].g);
            }
            pool[current].open = false;

            let current_g = pool[current].g;
            neighbors(current.index(), &mut nbuf);
            for &n in &nbuf {
                let nid = NodeId::new(n);
                let tentative = current_g + 1;
                let stale = pool.visit(nid);
                if !stale && pool[nid].g <= tentative {
                    continue;
                }
                let node = &mut pool[nid];
                node.g = tentative;
                node.f = tentative + manhattan(n, goal);
                node.parent = current;
                node.open = true;
                fr.push(nid, node.f, node.g).unwrap();
            }
        }
        None
    }

    #[test]
    fn finds_cheapest_path_around_the_wall() {
        let mut pool = NodePool::new(W * H);
        let mut fr = Frontier::new(8);
        // (0,0) to (3,3): the wall column forces the crossing at y = 3.
        assert_eq!(search(&mut pool, &mut fr, 0, 15), Some(6));
    }

    #[test]
    fn unreachable_goal_drains_the_frontier() {
        let mut pool = NodePool::new(W * H);
        let mut fr = Frontier::new(8);
        // The goal cell is a wall, so expansion exhausts the open set.
        assert_eq!(search(&mut pool, &mut fr, 0, 2), None);
        assert!(fr.is_empty());
    }

    #[test]
    fn pool_and_frontier_reuse_across_searches() {
        let mut pool = NodePool::new(W * H);
        let mut fr = Frontier::new(8);
        let first = search(&mut pool, &mut fr, 0, 15);
        let growths = fr.growth_count();
        for _ in 0..50 {
            assert_eq!(search(&mut pool, &mut fr, 0, 15), first);
        }
        // Warmed storage: repeat searches allocate nothing further.
        assert_eq!(fr.growth_count(), growths);
    }
}
