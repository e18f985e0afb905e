//! Indexed Priority Queue
//!
//! A binary min-heap keyed by `f64` priority that remembers where every item
//! sits. The reverse index lets [`IndexedMinHeap::decrease_key`] sift an item
//! up in O(log n) instead of pushing a duplicate entry.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
struct Slot<K> {
    key: K,
    priority: f64,
}

/// Min-heap with decrease-key support.
#[derive(Debug, Clone)]
pub(crate) struct IndexedMinHeap<K> {
    heap: Vec<Slot<K>>,

    /// Key -> position in `heap`.
    positions: HashMap<K, usize>,
}

impl<K: Clone + Eq + Hash> IndexedMinHeap<K> {
    /// Create an empty heap with room for `capacity` items.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Queue a key. Returns `false` if it is already queued.
    pub(crate) fn push(&mut self, key: K, priority: f64) -> bool {
        if self.positions.contains_key(&key) {
            return false;
        }
        let index = self.heap.len();
        self.positions.insert(key.clone(), index);
        self.heap.push(Slot { key, priority });
        self.sift_up(index);
        true
    }

    /// Remove and return the key with the smallest priority.
    pub(crate) fn pop(&mut self) -> Option<(K, f64)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let slot = self.heap.pop()?;
        self.positions.remove(&slot.key);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((slot.key, slot.priority))
    }

    /// Lower the priority of a queued key.
    ///
    /// Returns `false` if the key is not queued or `priority` is not lower
    /// than its current one.
    pub(crate) fn decrease_key(&mut self, key: &K, priority: f64) -> bool {
        let Some(&index) = self.positions.get(key) else {
            return false;
        };
        if priority >= self.heap[index].priority {
            return false;
        }
        self.heap[index].priority = priority;
        self.sift_up(index);
        true
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index].priority >= self.heap[parent].priority {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.heap[left].priority < self.heap[smallest].priority {
                smallest = left;
            }
            if right < len && self.heap[right].priority < self.heap[smallest].priority {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.swap(index, smallest);
            index = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.positions.insert(self.heap[a].key.clone(), a);
        self.positions.insert(self.heap[b].key.clone(), b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_priority_order() {
        let mut heap = IndexedMinHeap::with_capacity(5);
        for (key, priority) in [("d", 4.0), ("b", 2.0), ("e", 5.0), ("a", 1.0), ("c", 3.0)] {
            assert!(heap.push(key, priority));
        }

        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|(k, _)| k).collect();
        assert_eq!(order, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn duplicate_push_is_ignored() {
        let mut heap = IndexedMinHeap::with_capacity(1);
        assert!(heap.push(1, 3.0));
        assert!(!heap.push(1, 0.5));
        assert_eq!(heap.pop(), Some((1, 3.0)));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn decrease_key_moves_item_forward() {
        let mut heap = IndexedMinHeap::with_capacity(3);
        heap.push("x", f64::INFINITY);
        heap.push("y", 2.0);
        heap.push("z", 3.0);

        assert!(heap.decrease_key(&"x", 1.0));
        assert_eq!(heap.pop(), Some(("x", 1.0)));

        // Raising a priority is not a decrease.
        assert!(!heap.decrease_key(&"z", 10.0));
        assert!(!heap.decrease_key(&"missing", 0.0));
        assert_eq!(heap.pop(), Some(("y", 2.0)));
    }

    #[test]
    fn popped_key_can_be_pushed_again() {
        let mut heap = IndexedMinHeap::with_capacity(2);
        heap.push('a', f64::INFINITY);
        heap.push('b', 1.0);
        assert_eq!(heap.pop(), Some(('b', 1.0)));
        assert_eq!(heap.pop(), Some(('a', f64::INFINITY)));

        assert!(!heap.decrease_key(&'a', 5.0));
        assert!(heap.push('a', 5.0));
        assert_eq!(heap.pop(), Some(('a', 5.0)));
    }

    #[test]
    fn positions_track_slots_after_pops() {
        let mut heap = IndexedMinHeap::with_capacity(8);
        for i in 0..8u32 {
            heap.push(i, f64::from(8 - i));
        }
        assert_eq!(heap.pop(), Some((7, 1.0)));
        assert_eq!(heap.pop(), Some((6, 2.0)));

        // Popped keys are no longer indexed.
        assert!(!heap.decrease_key(&7, 0.0));
        assert!(heap.decrease_key(&0, 0.1));
        assert_eq!(heap.pop(), Some((0, 0.1)));
        assert_eq!(std::iter::from_fn(|| heap.pop()).count(), 5);
    }
}
