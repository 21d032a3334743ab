//! Fixed-capacity max-heap over `(key, value)` pairs, keyed by a plain
//! `i64` so ties need no tiebreaker.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Entry<T> {
    key: i64,
    value: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// A fixed-capacity max-heap: the value with the greatest key always sits at
/// the root.
///
/// Capacity is enforced: [`MaxHeap::insert`] panics if the heap is already at
/// capacity, matching the specification's "heap overflow is a precondition
/// violation" contract. Best-first search is the only caller in this crate,
/// and it sizes its heap generously up front (see
/// [`crate::best_first::BestFirst`]).
///
/// Ties in key need no stable order: `std::collections::BinaryHeap`'s
/// internal tie-breaking is not specified and none is required here.
pub struct MaxHeap<T> {
    capacity: usize,
    heap: BinaryHeap<Entry<T>>,
}

impl<T> MaxHeap<T> {
    /// Allocate a heap with room for `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        MaxHeap {
            capacity,
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Total entries the heap can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// `true` iff the heap holds no entries.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Insert `value` keyed by `key`. Ownership of `value` transfers into the heap.
    ///
    /// # Panics
    ///
    /// Panics if the heap is already at capacity.
    pub fn insert(&mut self, key: i64, value: T) {
        assert!(
            self.heap.len() < self.capacity,
            "heap overflow: capacity {} already reached",
            self.capacity
        );
        self.heap.push(Entry { key, value });
    }

    /// Remove and return the value with the greatest key.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    pub fn extract_max(&mut self) -> T {
        self.heap.pop().expect("extract_max on an empty heap").value
    }

    /// Borrow the value with the greatest key without removing it.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    pub fn peek_max(&self) -> &T {
        &self.heap.peek().expect("peek_max on an empty heap").value
    }
}
