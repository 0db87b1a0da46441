//! Indexed minimum priority queue keyed by `(distance, vertex)`.
//!
//! A binary heap plus a position map from vertex id to heap slot, so a
//! vertex's key can be lowered in place with one sift-up instead of a
//! remove-and-reinsert. Entries compare by distance (`f64::total_cmp`) and
//! then by vertex id, which makes the order total even with infinite keys.

use std::cmp::Ordering;

/// One queued vertex and its tentative distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueueEntry {
    pub distance: f64,
    pub vertex: usize,
}

impl QueueEntry {
    pub fn new(vertex: usize, distance: f64) -> Self {
        QueueEntry { distance, vertex }
    }

    fn key_cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Min-heap over [`QueueEntry`] holding at most one entry per vertex id.
#[derive(Debug)]
pub struct IndexedMinQueue {
    data: Vec<QueueEntry>,
    positions: Vec<Option<usize>>,
}

impl IndexedMinQueue {
    /// Create a queue for vertex ids in `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        IndexedMinQueue {
            data: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.slot(vertex).is_some()
    }

    /// Current key of `vertex`, if queued.
    pub fn priority(&self, vertex: usize) -> Option<f64> {
        self.slot(vertex).map(|idx| self.data[idx].distance)
    }

    /// Queue `vertex` with key `distance`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex >= capacity`.
    pub fn insert(&mut self, vertex: usize, distance: f64) {
        debug_assert!(!self.contains(vertex), "vertex {} already queued", vertex);
        let idx = self.data.len();
        self.data.push(QueueEntry::new(vertex, distance));
        self.positions[vertex] = Some(idx);
        self.sift_up(idx);
    }

    /// Remove and return the entry with the smallest `(distance, vertex)`.
    pub fn extract_min(&mut self) -> Option<QueueEntry> {
        if self.data.is_empty() {
            return None;
        }
        Some(self.remove_at(0))
    }

    /// Lower the key of a queued vertex. Returns `false` if it is not queued.
    pub fn decrease_key(&mut self, vertex: usize, distance: f64) -> bool {
        match self.slot(vertex) {
            Some(idx) => {
                debug_assert!(
                    distance.total_cmp(&self.data[idx].distance) != Ordering::Greater,
                    "decrease_key called with a larger key"
                );
                self.data[idx].distance = distance;
                self.sift_up(idx);
                true
            }
            None => false,
        }
    }

    /// Remove `vertex` wherever it sits in the heap.
    pub fn remove(&mut self, vertex: usize) -> Option<QueueEntry> {
        self.slot(vertex).map(|idx| self.remove_at(idx))
    }

    fn slot(&self, vertex: usize) -> Option<usize> {
        self.positions.get(vertex).copied().flatten()
    }

    fn remove_at(&mut self, idx: usize) -> QueueEntry {
        let entry = self.data.swap_remove(idx);
        self.positions[entry.vertex] = None;

        if idx < self.data.len() {
            self.positions[self.data[idx].vertex] = Some(idx);
            // the moved-in entry may belong above or below its new slot
            self.sift_down(idx);
            self.sift_up(idx);
        }
        entry
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.data[idx].key_cmp(&self.data[parent]) == Ordering::Less {
                self.swap_entries(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut smallest = idx;

            if left < len && self.data[left].key_cmp(&self.data[smallest]) == Ordering::Less {
                smallest = left;
            }
            if right < len && self.data[right].key_cmp(&self.data[smallest]) == Ordering::Less {
                smallest = right;
            }

            if smallest == idx {
                break;
            }
            self.swap_entries(idx, smallest);
            idx = smallest;
        }
    }

    fn swap_entries(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.positions[self.data[a].vertex] = Some(a);
        self.positions[self.data[b].vertex] = Some(b);
    }
}
