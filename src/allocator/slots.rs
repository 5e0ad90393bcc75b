//! Disjoint-set slot allocator.
//!
//! # Algorithm
//!
//! Slots `0..=max_slot` start as singleton sets. The representative of a
//! set is always its smallest member, which is the latest free slot at or
//! before any member of the set. Allocating slot `r` merges it into the
//! set of `r - 1`, so later queries that land on `r` fall through to the
//! next free slot below it. Slot 0 is a sentinel that is never allocated:
//! reaching it means nothing is free.
//!
//! # Complexity
//! Amortized O(α(n)) per `find`/`allocate` with path compression.
//!
//! # Reference
//! Tarjan (1975), "Efficiency of a Good But Not Linear Set Union Algorithm"

/// Union-find over time slots answering "latest free slot ≤ d".
///
/// # Invariants
/// - `find(s) <= s` for every slot `s`.
/// - `find(0) == 0`.
/// - A slot is free iff it is its own representative.
///
/// # Example
///
/// ```
/// use u_sequencing::allocator::SlotAllocator;
///
/// let mut slots = SlotAllocator::new(3);
/// assert_eq!(slots.allocate(2), Some(2));
/// assert_eq!(slots.allocate(2), Some(1));
/// assert_eq!(slots.allocate(2), None);
/// assert_eq!(slots.allocate(3), Some(3));
/// ```
#[derive(Debug, Clone)]
pub struct SlotAllocator {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl SlotAllocator {
    /// Creates an allocator with slots `1..=max_slot` free.
    ///
    /// # Panics
    /// If `max_slot == usize::MAX` (the slot table would need
    /// `usize::MAX + 1` entries) or the table cannot be allocated.
    /// Callers bound deadlines first, e.g. through
    /// [`ValidationConfig::max_deadline`](crate::validation::ValidationConfig).
    pub fn new(max_slot: usize) -> Self {
        let mut allocator = Self {
            parent: Vec::new(),
            rank: Vec::new(),
        };
        allocator.reset(max_slot);
        allocator
    }

    /// Resets to `max_slot + 1` singleton sets, reusing the buffers.
    ///
    /// # Panics
    /// Same conditions as [`new`](Self::new).
    pub fn reset(&mut self, max_slot: usize) {
        self.parent.clear();
        self.parent.extend(0..=max_slot);
        self.rank.clear();
        self.rank.resize(max_slot + 1, 0);
    }

    /// Highest slot index managed by this allocator.
    #[inline]
    pub fn max_slot(&self) -> usize {
        self.parent.len() - 1
    }

    /// Returns the representative of the set containing `slot`.
    ///
    /// The representative is the latest free slot at or before `slot`,
    /// or 0 if none is left. Compresses the traversed path.
    ///
    /// # Panics
    /// If `slot > max_slot()`.
    pub fn find(&mut self, slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = slot;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merges the sets containing `a` and `b`, returning the new root.
    ///
    /// The larger root is always attached under the smaller one. Rank is
    /// tracked as an upper bound on tree height but never decides the
    /// direction: linking a smaller root under a larger one would let
    /// `find` return a slot above the query and hand one slot out twice.
    ///
    /// # Panics
    /// If either slot is greater than `max_slot()`.
    pub fn union(&mut self, a: usize, b: usize) -> usize {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return root_a;
        }

        let (low, high) = if root_a < root_b {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parent[high] = low;
        self.rank[low] = self.rank[low].max(self.rank[high] + 1);
        low
    }

    /// Takes the latest free slot at or before `deadline`.
    ///
    /// Returns `None` when every slot in `1..=deadline` is taken. A
    /// deadline beyond `max_slot()` is treated as `max_slot()`.
    pub fn allocate(&mut self, deadline: usize) -> Option<usize> {
        let slot = self.find(deadline.min(self.max_slot()));
        if slot == 0 {
            return None;
        }
        self.union(slot, slot - 1);
        Some(slot)
    }

    /// Whether `slot` is still free. Slot 0 and out-of-range slots never are.
    pub fn is_free(&self, slot: usize) -> bool {
        slot != 0 && slot <= self.max_slot() && self.parent[slot] == slot
    }

    /// Number of free slots in `1..=max_slot()`.
    pub fn free_count(&self) -> usize {
        (1..=self.max_slot())
            .filter(|&slot| self.parent[slot] == slot)
            .count()
    }
}
