//! Growable array list
//!
//! A contiguous, index-addressable sequence with an explicit capacity policy.
//!
//! The list owns a fixed-size buffer of slots. Slots `0..len` hold the elements in
//! order; slots `len..capacity` are always empty. When an insertion finds the buffer
//! full, the buffer is reallocated at twice its size and the elements are moved over.
//! Capacity never shrinks on its own, not even on [`clear`](Sequence::clear).
//!
//! # Time Complexity
//!
//! | Operation      | Complexity     |
//! |----------------|----------------|
//! | `push_back`    | O(1) amortized |
//! | `get` / `set`  | O(1)           |
//! | `insert(i, _)` | O(len - i)     |
//! | `remove(i)`    | O(len - i)     |
//! | `pop_back`     | O(1)           |
//! | `index_of`     | O(n)           |
//! | `sort`         | O(n log n)     |
//!
//! # Example
//!
//! ```rust
//! use rust_basic_collections::Sequence;
//! use rust_basic_collections::array_list::ArrayList;
//!
//! let mut list = ArrayList::with_capacity(2).unwrap();
//! list.push_back(30);
//! list.push_back(10);
//! list.push_back(20);
//! assert_eq!(list.capacity(), 4);
//!
//! list.sort();
//! assert_eq!(list.to_vec(), vec![10, 20, 30]);
//! assert_eq!(list.index_of(&20), Some(1));
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::trace;

use crate::traits::{fmt_items, CollectionError, Result, Sequence};

/// Capacity used by [`Sequence::new`] and [`Default`]
pub const DEFAULT_CAPACITY: usize = 10;

/// A growable array list
///
/// Elements live in a boxed slot buffer whose length is the capacity. The
/// buffer is never exposed; all access goes through bounds-checked indices.
#[derive(Clone)]
pub struct ArrayList<T> {
    /// Backing buffer, `Some` exactly on `0..len`
    slots: Box<[Option<T>]>,
    len: usize,
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> ArrayList<T> {
    /// Creates an empty list able to hold `capacity` elements before growing
    ///
    /// # Errors
    /// Returns [`CollectionError::InvalidConfiguration`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CollectionError::InvalidConfiguration { capacity });
        }
        Ok(Self {
            slots: empty_slots(capacity),
            len: 0,
        })
    }

    /// Returns the number of slots currently allocated
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Swaps the elements at `a` and `b`
    ///
    /// # Panics
    /// Panics if either index is not below `len()`, like [`slice::swap`].
    pub fn swap(&mut self, a: usize, b: usize) {
        assert!(
            a < self.len && b < self.len,
            "swap indices ({}, {}) out of range for length {}",
            a,
            b,
            self.len
        );
        self.slots.swap(a, b);
    }

    /// Doubles the buffer if the next insertion would not fit
    fn ensure_capacity(&mut self) {
        if self.len < self.slots.len() {
            return;
        }
        let old_capacity = self.slots.len();
        let new_capacity = old_capacity
            .checked_mul(2)
            .expect("array list capacity overflow");

        let mut grown = empty_slots(new_capacity);
        for (dst, src) in grown.iter_mut().zip(self.slots.iter_mut()) {
            *dst = src.take();
        }
        self.slots = grown;

        trace!(
            "array list grew from {} to {} slots",
            old_capacity,
            new_capacity
        );
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(CollectionError::OutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// Places `value` at `index` and shifts `index..len` one slot right
    ///
    /// Caller guarantees `index <= len`.
    fn shift_in(&mut self, index: usize, value: T) {
        self.ensure_capacity();
        self.slots[self.len] = Some(value);
        self.slots[index..=self.len].rotate_right(1);
        self.len += 1;
    }
}

impl<T> Sequence<T> for ArrayList<T> {
    type Iter<'a> = Iter<'a, T> where T: 'a;

    fn new() -> Self {
        Self {
            slots: empty_slots(DEFAULT_CAPACITY),
            len: 0,
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn push_back(&mut self, value: T) {
        self.ensure_capacity();
        self.slots[self.len] = Some(value);
        self.len += 1;
    }

    fn push_front(&mut self, value: T) {
        self.shift_in(0, value);
    }

    fn get(&self, index: usize) -> Result<&T> {
        self.slots[..self.len]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(CollectionError::OutOfRange {
                index,
                len: self.len,
            })
    }

    fn set(&mut self, index: usize, value: T) -> Result<T> {
        self.check_index(index)?;
        self.slots[index]
            .replace(value)
            .ok_or(CollectionError::OutOfRange {
                index,
                len: self.len,
            })
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(CollectionError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.shift_in(index, value);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        let removed = self.slots[index]
            .take()
            .ok_or(CollectionError::OutOfRange {
                index,
                len: self.len,
            })?;
        // The emptied slot rotates to the old tail position.
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        Ok(removed)
    }

    fn first(&self) -> Result<&T> {
        if self.len == 0 {
            return Err(CollectionError::EmptyCollection);
        }
        self.get(0)
    }

    fn last(&self) -> Result<&T> {
        if self.len == 0 {
            return Err(CollectionError::EmptyCollection);
        }
        self.get(self.len - 1)
    }

    fn pop_front(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(CollectionError::EmptyCollection);
        }
        self.remove(0)
    }

    fn pop_back(&mut self) -> Result<T> {
        let last = self
            .len
            .checked_sub(1)
            .ok_or(CollectionError::EmptyCollection)?;
        let value = self.slots[last]
            .take()
            .ok_or(CollectionError::EmptyCollection)?;
        self.len = last;
        Ok(value)
    }

    fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len <= 1 {
            return;
        }
        // Slots are sorted in place; a panicking comparator leaves a permutation.
        self.slots[..self.len].sort_by(|a, b| match (a, b) {
            (Some(x), Some(y)) => compare(x, y),
            _ => Ordering::Equal,
        });
    }

    fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.slots[..self.len].iter(),
        }
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_items(f, self.iter())
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Borrowing iterator over an [`ArrayList`]
///
/// Bound to the list by lifetime, so the list cannot be structurally changed
/// while the iterator is alive.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    slots: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.slots.by_ref().find_map(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().rev().find_map(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Owning iterator over an [`ArrayList`]
#[derive(Debug)]
pub struct IntoIter<T> {
    slots: std::iter::Flatten<std::vec::IntoIter<Option<T>>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.slots.next()
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let mut slots = self.slots.into_vec();
        slots.truncate(self.len);
        IntoIter {
            slots: slots.into_iter().flatten(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots_after_len_are_empty<T>(list: &ArrayList<T>) -> bool {
        list.slots[list.len..].iter().all(Option::is_none)
            && list.slots[..list.len].iter().all(Option::is_some)
    }

    #[test]
    fn test_default_capacity() {
        let list: ArrayList<i32> = ArrayList::new();
        assert_eq!(list.capacity(), DEFAULT_CAPACITY);
        assert!(list.is_empty());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(
            ArrayList::<i32>::with_capacity(0).unwrap_err(),
            CollectionError::InvalidConfiguration { capacity: 0 }
        );
        assert_eq!(ArrayList::<i32>::with_capacity(1).unwrap().capacity(), 1);
    }

    #[test]
    fn test_capacity_doubles() {
        let mut list = ArrayList::with_capacity(1).unwrap();
        let mut seen = vec![list.capacity()];
        for i in 0..9 {
            list.push_back(i);
            if *seen.last().unwrap() != list.capacity() {
                seen.push(list.capacity());
            }
        }
        assert_eq!(seen, vec![1, 2, 4, 8, 16]);
        assert_eq!(list.len(), 9);
        assert!(slots_after_len_are_empty(&list));
        assert_eq!(list.to_vec(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_insert_shifts_right() {
        let mut list: ArrayList<i32> = [1, 2, 4].into_iter().collect();
        list.insert(2, 3).unwrap();
        list.insert(0, 0).unwrap();
        list.insert(5, 5).unwrap();
        assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4, 5]);
        assert!(slots_after_len_are_empty(&list));
    }

    #[test]
    fn test_insert_at_full_capacity() {
        let mut list = ArrayList::with_capacity(2).unwrap();
        list.push_back('a');
        list.push_back('c');
        list.insert(1, 'b').unwrap();
        assert_eq!(list.capacity(), 4);
        assert_eq!(list.to_vec(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_remove_shifts_left_and_clears_slot() {
        let mut list: ArrayList<String> = ["a", "b", "c", "d"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(list.remove(1).unwrap(), "b");
        assert_eq!(list.len(), 3);
        assert!(slots_after_len_are_empty(&list));
        assert_eq!(list.to_vec(), vec!["a", "c", "d"]);

        assert_eq!(list.remove(2).unwrap(), "d");
        assert_eq!(list.remove(0).unwrap(), "a");
        assert_eq!(list.to_vec(), vec!["c"]);
        assert!(slots_after_len_are_empty(&list));
    }

    #[test]
    fn test_out_of_range() {
        let mut list: ArrayList<i32> = (0..3).collect();
        let err = CollectionError::OutOfRange { index: 3, len: 3 };
        assert_eq!(list.get(3), Err(err));
        assert_eq!(list.set(3, 9), Err(err));
        assert_eq!(list.remove(3), Err(err));
        assert_eq!(
            list.insert(4, 9),
            Err(CollectionError::OutOfRange { index: 4, len: 3 })
        );
        assert_eq!(list.len(), 3);
        assert_eq!(list.to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn test_set_returns_previous() {
        let mut list: ArrayList<i32> = (0..3).collect();
        assert_eq!(list.set(1, 10), Ok(1));
        assert_eq!(list.get(1), Ok(&10));
    }

    #[test]
    fn test_ends_on_empty() {
        let mut list: ArrayList<i32> = ArrayList::new();
        assert_eq!(list.first(), Err(CollectionError::EmptyCollection));
        assert_eq!(list.last(), Err(CollectionError::EmptyCollection));
        assert_eq!(list.pop_back(), Err(CollectionError::EmptyCollection));
        assert_eq!(list.pop_front(), Err(CollectionError::EmptyCollection));
    }

    #[test]
    fn test_ends() {
        let mut list: ArrayList<i32> = ArrayList::new();
        list.push_back(2);
        list.push_front(1);
        list.push_back(3);
        assert_eq!(list.first(), Ok(&1));
        assert_eq!(list.last(), Ok(&3));
        assert_eq!(list.pop_back(), Ok(3));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.to_vec(), vec![2]);
        assert!(slots_after_len_are_empty(&list));
    }

    #[test]
    fn test_search() {
        let list: ArrayList<i32> = [4, 7, 4, 9].into_iter().collect();
        assert_eq!(list.index_of(&4), Some(0));
        assert_eq!(list.last_index_of(&4), Some(2));
        assert_eq!(list.index_of(&5), None);
        assert_eq!(list.last_index_of(&5), None);
        assert!(list.contains(&9));
        assert!(!list.contains(&1));
    }

    #[test]
    fn test_sort_natural_and_custom() {
        let mut list: ArrayList<i32> = [5, 3, 8, 1, 3].into_iter().collect();
        list.sort();
        assert_eq!(list.to_vec(), vec![1, 3, 3, 5, 8]);
        list.sort_by(|a, b| b.cmp(a));
        assert_eq!(list.to_vec(), vec![8, 5, 3, 3, 1]);
        assert_eq!(list.len(), 5);
        assert!(slots_after_len_are_empty(&list));
    }

    #[test]
    fn test_sort_survives_panicking_comparator() {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        let mut list: ArrayList<i32> = (0..5).rev().collect();
        let mut calls = 0;
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            list.sort_by(|a, b| {
                calls += 1;
                if calls == 3 {
                    panic!("comparator failed");
                }
                a.cmp(b)
            })
        }));
        assert!(outcome.is_err());

        assert_eq!(list.len(), 5);
        assert!(slots_after_len_are_empty(&list));
        assert_eq!(list.iter().count(), 5);
        let mut values = list.to_vec();
        values.sort();
        assert_eq!(values, vec![0, 1, 2, 3, 4]);

        list.sort();
        assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut list: ArrayList<i32> = (0..25).collect();
        let capacity = list.capacity();
        list.clear();
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), capacity);
        assert!(slots_after_len_are_empty(&list));
        assert_eq!(list.first(), Err(CollectionError::EmptyCollection));
        list.push_back(1);
        assert_eq!(list.to_vec(), vec![1]);
    }

    #[test]
    fn test_iter_both_directions() {
        let list: ArrayList<i32> = (1..=4).collect();
        let mut it = list.iter();
        assert_eq!(it.len(), 4);
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.collect::<Vec<_>>(), vec![&2, &3]);
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_swap() {
        let mut list: ArrayList<i32> = (0..3).collect();
        list.swap(0, 2);
        assert_eq!(list.to_vec(), vec![2, 1, 0]);
    }

    #[test]
    #[should_panic]
    fn test_swap_out_of_range_panics() {
        let mut list: ArrayList<i32> = (0..3).collect();
        list.swap(0, 3);
    }

    #[test]
    fn test_display_and_debug() {
        let list: ArrayList<i32> = (1..=3).collect();
        assert_eq!(list.to_string(), "[1, 2, 3]");
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
        assert_eq!(ArrayList::<i32>::new().to_string(), "[]");
    }
}
