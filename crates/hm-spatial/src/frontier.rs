//! Indexed binary min-heap backing the A* open set.
//!
//! `std::collections::BinaryHeap` cannot find an item to lower its priority,
//! so searches built on it push duplicates and skip stale pops.  `Frontier`
//! instead keeps an item → heap-slot index next to the heap, which gives
//! O(1) membership, O(log n) insert, decrease-key and extract-min, and never
//! holds an item twice.
//!
//! # Tie-breaking
//!
//! Every insertion takes a sequence number.  Among equal priorities the item
//! inserted first is extracted first; a decrease-key keeps the original
//! number.  This makes searches deterministic: of several equal-cost routes,
//! the one whose tiles were discovered earliest wins.

use std::hash::Hash;

use crate::TileMap;

#[derive(Clone, Debug)]
struct Entry<T> {
    item:     T,
    priority: f64,
    seq:      u64,
}

impl<T> Entry<T> {
    /// `true` if `self` should be extracted before `other`.
    #[inline]
    fn before(&self, other: &Entry<T>) -> bool {
        self.priority < other.priority
            || (self.priority == other.priority && self.seq < other.seq)
    }
}

/// A min-priority queue of unique items with decrease-key.
#[derive(Clone, Debug)]
pub struct Frontier<T: Copy + Eq + Hash> {
    heap:     Vec<Entry<T>>,
    slots:    TileMap<T, usize>,
    next_seq: u64,
}

impl<T: Copy + Eq + Hash> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Eq + Hash> Frontier<T> {
    pub fn new() -> Self {
        Self {
            heap:     Vec::new(),
            slots:    TileMap::default(),
            next_seq: 0,
        }
    }

    /// Number of queued items.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn contains(&self, item: T) -> bool {
        self.slots.contains_key(&item)
    }

    /// Current priority of `item`, if queued.
    pub fn priority_of(&self, item: T) -> Option<f64> {
        self.slots.get(&item).map(|&slot| self.heap[slot].priority)
    }

    /// Queue `item` at `priority`.
    ///
    /// `item` must not already be queued; use [`insert_or_update`] when it
    /// may be.  In release builds a duplicate insert re-prioritises the
    /// existing entry instead of adding a second one.
    ///
    /// [`insert_or_update`]: Frontier::insert_or_update
    pub fn insert(&mut self, item: T, priority: f64) {
        debug_assert!(!self.contains(item), "item inserted into frontier twice");
        if let Some(&slot) = self.slots.get(&item) {
            self.heap[slot].priority = priority;
            let slot = self.sift_up(slot);
            self.sift_down(slot);
            return;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        let slot = self.heap.len();
        self.heap.push(Entry { item, priority, seq });
        self.slots.insert(item, slot);
        self.sift_up(slot);
    }

    /// Queue `item`, or lower its priority if it is already queued.
    ///
    /// A priority that is not strictly better than the queued one is ignored.
    /// Returns `true` if the frontier changed.
    pub fn insert_or_update(&mut self, item: T, priority: f64) -> bool {
        match self.slots.get(&item) {
            None => {
                self.insert(item, priority);
                true
            }
            Some(&slot) if priority < self.heap[slot].priority => {
                self.heap[slot].priority = priority;
                self.sift_up(slot);
                true
            }
            Some(_) => false,
        }
    }

    /// Remove and return the lowest-priority item.
    pub fn extract_min(&mut self) -> Option<T> {
        self.extract_min_with_priority().map(|(item, _)| item)
    }

    /// Remove and return the lowest-priority item with its priority.
    pub fn extract_min_with_priority(&mut self) -> Option<(T, f64)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let top = self.heap.pop()?;
        self.slots.remove(&top.item);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((top.item, top.priority))
    }

    /// Drop every queued item.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.slots.clear();
        self.next_seq = 0;
    }

    // ── Heap internals ────────────────────────────────────────────────────

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.slots.insert(self.heap[a].item, a);
        self.slots.insert(self.heap[b].item, b);
    }

    fn sift_up(&mut self, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.heap[slot].before(&self.heap[parent]) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
        slot
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut best = slot;
            if left < len && self.heap[left].before(&self.heap[best]) {
                best = left;
            }
            if right < len && self.heap[right].before(&self.heap[best]) {
                best = right;
            }
            if best == slot {
                break;
            }
            self.swap(slot, best);
            slot = best;
        }
    }
}
