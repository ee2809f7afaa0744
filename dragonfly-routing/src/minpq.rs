//! Array-backed min-heap with extrinsic priorities and decrease-key
//!
//! The A* relaxation loop needs to lower the priority of a vertex that
//! is already enqueued, so alongside the dense heap array the queue
//! keeps an item→slot table, updated on every swap. That makes
//! `contains` O(1) and `change_priority` O(log n); without it, locating
//! an item's slot degenerates to a scan of the whole heap.

use std::fmt::Debug;
use std::hash::Hash;

use dragonfly_common::{Error, Result};
use rustc_hash::FxHashMap;

/// Binary min-heap keyed by caller-supplied `f64` priorities.
///
/// At most one live entry per distinct item. Priorities must not be NaN;
/// equal priorities extract in heap order, which is deterministic for a
/// fixed sequence of operations.
pub struct ArrayHeapMinPq<T> {
    // (item, priority) pairs in heap order; parent of slot i is (i-1)/2
    heap: Vec<(T, f64)>,
    // item -> current slot in `heap`
    slots: FxHashMap<T, usize>,
}

impl<T: Eq + Hash + Clone + Debug> ArrayHeapMinPq<T> {
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            slots: FxHashMap::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            slots: FxHashMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// True iff `item` currently resides in the queue.
    pub fn contains(&self, item: &T) -> bool {
        self.slots.contains_key(item)
    }

    /// Add `item` with the given priority.
    ///
    /// Fails with `DuplicateItem` if the item is already enqueued and
    /// with `InvalidInput` on a NaN priority (NaN breaks the heap's
    /// total order).
    pub fn insert(&mut self, item: T, priority: f64) -> Result<()> {
        if priority.is_nan() {
            return Err(Error::InvalidInput(format!(
                "priority for {item:?} must not be NaN"
            )));
        }
        if self.slots.contains_key(&item) {
            return Err(Error::DuplicateItem(format!("{item:?}")));
        }
        let slot = self.heap.len();
        self.slots.insert(item.clone(), slot);
        self.heap.push((item, priority));
        self.swim(slot);
        Ok(())
    }

    /// The minimum-priority item, without removing it.
    pub fn peek_min(&self) -> Result<&T> {
        self.heap.first().map(|(item, _)| item).ok_or(Error::EmptyQueue)
    }

    /// Remove and return the minimum-priority item.
    pub fn extract_min(&mut self) -> Result<T> {
        let last = match self.heap.len().checked_sub(1) {
            Some(last) => last,
            None => return Err(Error::EmptyQueue),
        };
        self.swap(0, last);
        let (item, _) = self.heap.pop().ok_or(Error::EmptyQueue)?;
        self.slots.remove(&item);
        if !self.heap.is_empty() {
            self.sink(0);
        }
        Ok(item)
    }

    /// Re-prioritize an enqueued item, sifting up on a decrease and down
    /// on an increase.
    pub fn change_priority(&mut self, item: &T, priority: f64) -> Result<()> {
        if priority.is_nan() {
            return Err(Error::InvalidInput(format!(
                "priority for {item:?} must not be NaN"
            )));
        }
        let slot = *self
            .slots
            .get(item)
            .ok_or_else(|| Error::NoSuchItem(format!("{item:?}")))?;
        let old = self.heap[slot].1;
        self.heap[slot].1 = priority;
        if priority < old {
            self.swim(slot);
        } else {
            self.sink(slot);
        }
        Ok(())
    }

    fn swim(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[parent].1 <= self.heap[slot].1 {
                break;
            }
            self.swap(parent, slot);
            slot = parent;
        }
    }

    fn sink(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            if left >= self.heap.len() {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < self.heap.len() && self.heap[right].1 < self.heap[left].1 {
                child = right;
            }
            if self.heap[slot].1 <= self.heap[child].1 {
                break;
            }
            self.swap(slot, child);
            slot = child;
        }
    }

    // Every swap must keep the slot table consistent
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.slots.insert(self.heap[a].0.clone(), a);
        self.slots.insert(self.heap[b].0.clone(), b);
    }
}

impl<T: Eq + Hash + Clone + Debug> Default for ArrayHeapMinPq<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_in_priority_order() {
        let mut pq = ArrayHeapMinPq::new();
        pq.insert("joshua", 50.0).unwrap();
        pq.insert("bob", 10.0).unwrap();
        pq.insert("alice", 20.0).unwrap();
        pq.insert("joe", 15.0).unwrap();
        pq.insert("susan", 30.0).unwrap();

        assert_eq!(pq.peek_min().unwrap(), &"bob");
        assert_eq!(pq.extract_min().unwrap(), "bob");
        assert_eq!(pq.extract_min().unwrap(), "joe");
        assert_eq!(pq.extract_min().unwrap(), "alice");
        assert_eq!(pq.extract_min().unwrap(), "susan");
        assert_eq!(pq.extract_min().unwrap(), "joshua");
        assert!(pq.is_empty());
    }

    #[test]
    fn size_tracks_inserts_and_extractions() {
        let mut pq = ArrayHeapMinPq::new();
        for i in 0..10 {
            pq.insert(i, f64::from(i)).unwrap();
        }
        assert_eq!(pq.len(), 10);
        for k in 0..4 {
            pq.extract_min().unwrap();
            assert_eq!(pq.len(), 10 - k - 1);
        }
    }

    #[test]
    fn change_priority_reorders_extraction() {
        let mut pq = ArrayHeapMinPq::new();
        pq.insert("a", 1.0).unwrap();
        pq.insert("b", 2.0).unwrap();
        pq.insert("c", 3.0).unwrap();

        // Decrease: c jumps the queue
        pq.change_priority(&"c", 0.5).unwrap();
        assert_eq!(pq.peek_min().unwrap(), &"c");

        // Increase: c falls to the back again
        pq.change_priority(&"c", 9.0).unwrap();
        assert_eq!(pq.extract_min().unwrap(), "a");
        assert_eq!(pq.extract_min().unwrap(), "b");
        assert_eq!(pq.extract_min().unwrap(), "c");
    }

    #[test]
    fn contains_follows_queue_membership() {
        let mut pq = ArrayHeapMinPq::new();
        assert!(!pq.contains(&"x"));
        pq.insert("x", 1.0).unwrap();
        assert!(pq.contains(&"x"));
        pq.extract_min().unwrap();
        assert!(!pq.contains(&"x"));
    }

    #[test]
    fn empty_queue_operations_are_rejected() {
        let mut pq: ArrayHeapMinPq<&str> = ArrayHeapMinPq::new();
        assert_eq!(pq.peek_min().unwrap_err(), Error::EmptyQueue);
        assert_eq!(pq.extract_min().unwrap_err(), Error::EmptyQueue);
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut pq = ArrayHeapMinPq::new();
        pq.insert("x", 1.0).unwrap();
        let err = pq.insert("x", 2.0).unwrap_err();
        assert!(matches!(err, Error::DuplicateItem(_)));
        // original entry untouched
        assert_eq!(pq.len(), 1);
        assert_eq!(pq.peek_min().unwrap(), &"x");
    }

    #[test]
    fn change_priority_of_absent_item_is_rejected() {
        let mut pq: ArrayHeapMinPq<&str> = ArrayHeapMinPq::new();
        let err = pq.change_priority(&"ghost", 1.0).unwrap_err();
        assert!(matches!(err, Error::NoSuchItem(_)));
    }

    #[test]
    fn nan_priorities_are_rejected() {
        let mut pq = ArrayHeapMinPq::new();
        assert!(matches!(
            pq.insert("x", f64::NAN),
            Err(Error::InvalidInput(_))
        ));
        pq.insert("x", 1.0).unwrap();
        assert!(matches!(
            pq.change_priority(&"x", f64::NAN),
            Err(Error::InvalidInput(_))
        ));
        // priority unchanged by the failed call
        assert_eq!(pq.extract_min().unwrap(), "x");
    }

    #[test]
    fn equal_priorities_extract_deterministically() {
        let build = || {
            let mut pq = ArrayHeapMinPq::new();
            for name in ["a", "b", "c", "d"] {
                pq.insert(name, 1.0).unwrap();
            }
            pq
        };
        let mut first = build();
        let mut second = build();
        for _ in 0..4 {
            assert_eq!(first.extract_min().unwrap(), second.extract_min().unwrap());
        }
    }

    #[test]
    fn random_inserts_extract_in_sorted_order() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(17);
        let mut pq = ArrayHeapMinPq::new();
        let mut priorities = Vec::new();
        for item in 0..500usize {
            let priority = rng.gen_range(0.0..100.0);
            priorities.push(priority);
            pq.insert(item, priority).unwrap();
        }

        let mut last = f64::NEG_INFINITY;
        while let Ok(item) = pq.extract_min() {
            assert!(priorities[item] >= last, "extraction out of order");
            last = priorities[item];
        }
        assert!(pq.is_empty());
    }

    #[test]
    fn slot_table_survives_heavy_churn() {
        let mut pq = ArrayHeapMinPq::new();
        for i in 0..100u32 {
            pq.insert(i, f64::from(100 - i)).unwrap();
        }
        // Whip priorities around, then confirm extraction is sorted
        for i in 0..100u32 {
            pq.change_priority(&i, f64::from((i * 37) % 101)).unwrap();
        }
        let mut last = f64::NEG_INFINITY;
        for _ in 0..100 {
            let item = pq.extract_min().unwrap();
            let priority = f64::from((item * 37) % 101);
            assert!(priority >= last, "extraction out of order");
            last = priority;
        }
    }
}
