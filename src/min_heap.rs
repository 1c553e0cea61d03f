//! Binary min-heap
//!
//! A binary min-heap stored level by level in an [`ArrayList`]: the children of
//! index `i` are `2i + 1` and `2i + 2`, its parent is `(i - 1) / 2`. There are no
//! node objects; the position in the array is the node.
//!
//! Every parent compares less than or equal to each of its children under the
//! heap's order. [`insert`](MinHeap::insert) appends and sifts up,
//! [`extract_min`](MinHeap::extract_min) moves the last element to the root and
//! sifts down. When both children tie, sift-down descends into the left one, so
//! the resulting layout is deterministic for a given sequence of calls.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(log n)   |
//! | `extract_min` | O(log n)   |
//! | `peek_min`    | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use rust_basic_collections::min_heap::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! for value in [10, 20, 5, 15, 30] {
//!     heap.insert(value);
//! }
//!
//! assert_eq!(heap.peek_min(), Ok(&5));
//! assert_eq!(heap.extract_min(), Ok(5));
//! assert_eq!(heap.extract_min(), Ok(10));
//! assert_eq!(heap.len(), 3);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::array_list::ArrayList;
use crate::traits::{CollectionError, Result, Sequence};

/// A binary min-heap over an [`ArrayList`]
///
/// The order is a plain function pointer: `Ord::cmp` for [`MinHeap::new`], or
/// any total order passed to [`MinHeap::with_comparator`].
#[derive(Clone)]
pub struct MinHeap<T> {
    storage: ArrayList<T>,
    compare: fn(&T, &T) -> Ordering,
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap ordered by `T`'s natural order
    pub fn new() -> Self {
        Self::with_comparator(T::cmp)
    }
}

impl<T> MinHeap<T> {
    /// Creates an empty heap ordered by `compare`
    ///
    /// `compare` must be a total order; the smallest element under it is
    /// extracted first.
    pub fn with_comparator(compare: fn(&T, &T) -> Ordering) -> Self {
        Self {
            storage: ArrayList::new(),
            compare,
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Inserts an element
    pub fn insert(&mut self, value: T) {
        self.storage.push_back(value);
        self.sift_up(self.storage.len() - 1);
    }

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// Returns [`CollectionError::EmptyCollection`] if the heap is empty.
    pub fn peek_min(&self) -> Result<&T> {
        self.storage.first()
    }

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns [`CollectionError::EmptyCollection`] if the heap is empty.
    pub fn extract_min(&mut self) -> Result<T> {
        if self.storage.is_empty() {
            return Err(CollectionError::EmptyCollection);
        }

        let last_idx = self.storage.len() - 1;
        self.storage.swap(0, last_idx);
        let min = self.storage.pop_back()?;

        if !self.storage.is_empty() {
            self.sift_down(0);
        }

        Ok(min)
    }

    /// Removes every element, keeping the allocated storage
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Read-only view of the backing array in heap layout
    pub fn storage(&self) -> &ArrayList<T> {
        &self.storage
    }

    /// Drains the heap into a `Vec` in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(value) = self.extract_min() {
            sorted.push(value);
        }
        sorted
    }

    /// Returns true if the element at `a` orders strictly before the one at `b`
    ///
    /// An index past the end never orders before anything.
    fn less(&self, a: usize, b: usize) -> bool {
        match (self.storage.get(a), self.storage.get(b)) {
            (Ok(x), Ok(y)) => (self.compare)(x, y) == Ordering::Less,
            _ => false,
        }
    }

    /// Swap the entry with its parent while the comparator ranks it strictly lower
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.less(index, parent) {
                self.storage.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Push the entry toward the leaves, trading places with the lower child;
    /// equal children resolve to the left one
    fn sift_down(&mut self, mut index: usize) {
        let len = self.storage.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            // Strict comparison: on a tie the left child stays chosen.
            if right < len && self.less(right, smallest) {
                smallest = right;
            }

            if smallest != index {
                self.storage.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("storage", &self.storage)
            .finish()
    }
}

impl<T> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
