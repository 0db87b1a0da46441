//! Classic comparison sorts over any `Ord` element type.
//!
//! [`Sorter`] owns a sequence and a scratch buffer of the same length (used
//! only by merge sort) and sorts the sequence in place into non-decreasing
//! order with one of five textbook algorithms:
//!
//! - **Bubble**: O(n²), exits early once a pass makes no swap
//! - **Selection**: O(n²) comparisons, O(n) swaps
//! - **Insertion**: O(n²) worst case, O(n) on sorted input
//! - **Merge**: O(n log n), stable (ties take the left run first)
//! - **Quick**: Hoare partition around the middle element, O(n log n)
//!   expected, O(n²) worst case

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The five sorting algorithms offered by [`Sorter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 5] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
    ];

    /// Lower-case name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = Error;

    /// Accepts `quick`, `quick_sort`, `quick-sort` and `quicksort` (any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        let name = lowered
            .trim_end_matches("_sort")
            .trim_end_matches("-sort")
            .trim_end_matches("sort");
        SortAlgorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == name)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/// A sequence of comparable elements plus the scratch space to sort it.
#[derive(Debug, Clone)]
pub struct Sorter<T> {
    items: Vec<T>,
    scratch: Vec<T>,
}

impl<T: Ord + Clone> Sorter<T> {
    /// Take ownership of `items` and allocate a scratch buffer of equal length.
    pub fn new(items: Vec<T>) -> Self {
        let scratch = items.clone();
        Sorter { items, scratch }
    }

    /// Copy `items` into a new sorter.
    pub fn from_slice(items: &[T]) -> Self {
        Self::new(items.to_vec())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current contents, sorted or not.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Give back the sequence, dropping the scratch buffer.
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }

    /// Check whether the contents are in non-decreasing order.
    pub fn is_sorted(&self) -> bool {
        is_sorted(&self.items)
    }

    /// Sort in place with the chosen algorithm; every algorithm leaves a
    /// non-decreasing permutation of the original contents.
    pub fn sort(&mut self, algorithm: SortAlgorithm) {
        match algorithm {
            SortAlgorithm::Bubble => self.bubble_sort(),
            SortAlgorithm::Selection => self.selection_sort(),
            SortAlgorithm::Insertion => self.insertion_sort(),
            SortAlgorithm::Merge => self.merge_sort(),
            SortAlgorithm::Quick => self.quick_sort(),
        }
    }

    /// Swap adjacent out-of-order pairs; pass `k` fixes the `k`-th largest.
    pub fn bubble_sort(&mut self) {
        let n = self.items.len();
        for end in (1..n).rev() {
            let mut swapped = false;
            for j in 0..end {
                if self.items[j] > self.items[j + 1] {
                    self.items.swap(j, j + 1);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }
    }

    /// Swap the minimum of the unsorted suffix into each position.
    pub fn selection_sort(&mut self) {
        let n = self.items.len();
        for i in 0..n {
            let mut min_position = i;
            for j in (i + 1)..n {
                if self.items[j] < self.items[min_position] {
                    min_position = j;
                }
            }
            if min_position != i {
                self.items.swap(i, min_position);
            }
        }
    }

    /// Grow a sorted prefix: hold each new element aside, shift the larger
    /// prefix elements one slot right, then write it into the gap.
    pub fn insertion_sort(&mut self) {
        for i in 1..self.items.len() {
            let mut slot = i;
            while slot > 0 && self.items[slot - 1] > self.items[i] {
                slot -= 1;
            }
            // moves items[i] to `slot` and items[slot..i] one place right
            self.items[slot..=i].rotate_right(1);
        }
    }

    /// Top-down merge sort through the scratch buffer; stable.
    pub fn merge_sort(&mut self) {
        let n = self.items.len();
        self.merge_sort_range(0, n);
    }

    /// Sort `items[low..high]`.
    fn merge_sort_range(&mut self, low: usize, high: usize) {
        if high - low < 2 {
            return;
        }
        let mid = low + (high - low) / 2;
        self.merge_sort_range(low, mid);
        self.merge_sort_range(mid, high);
        self.merge(low, mid, high);
    }

    /// Merge the sorted runs `items[low..mid]` and `items[mid..high]`.
    fn merge(&mut self, low: usize, mid: usize, high: usize) {
        self.scratch[low..high].clone_from_slice(&self.items[low..high]);

        let mut left = low;
        let mut right = mid;
        let mut current = low;

        while left < mid && right < high {
            if self.scratch[left] <= self.scratch[right] {
                self.items[current] = self.scratch[left].clone();
                left += 1;
            } else {
                self.items[current] = self.scratch[right].clone();
                right += 1;
            }
            current += 1;
        }

        // leftover right-run elements are already in place
        while left < mid {
            self.items[current] = self.scratch[left].clone();
            left += 1;
            current += 1;
        }
    }

    /// Quick sort with a middle-element pivot.
    pub fn quick_sort(&mut self) {
        let n = self.items.len();
        if n > 1 {
            self.quick_sort_range(0, n - 1);
        }
    }

    /// Sort `items[low..=high]`.
    fn quick_sort_range(&mut self, low: usize, high: usize) {
        if low >= high {
            return;
        }
        let split = self.partition(low, high);
        self.quick_sort_range(low, split);
        self.quick_sort_range(split + 1, high);
    }

    /// Hoare partition around the middle element.
    ///
    /// Returns `split` in `low..high` such that every element of
    /// `items[low..=split]` is `<=` every element of `items[split + 1..=high]`.
    fn partition(&mut self, low: usize, high: usize) -> usize {
        let pivot = self.items[low + (high - low) / 2].clone();
        let mut left = low;
        let mut right = high;

        loop {
            while self.items[left] < pivot {
                left += 1;
            }
            while self.items[right] > pivot {
                right -= 1;
            }
            if left >= right {
                return right;
            }
            self.items.swap(left, right);
            left += 1;
            right -= 1;
        }
    }
}

impl<T: Ord + Clone> From<Vec<T>> for Sorter<T> {
    fn from(items: Vec<T>) -> Self {
        Sorter::new(items)
    }
}

impl<T: fmt::Display> fmt::Display for Sorter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for item in &self.items {
            write!(f, "{}, ", item)?;
        }
        f.write_str("}")
    }
}

/// Check if a slice is in non-decreasing order.
#[inline]
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
