//! FIFO queue over [`LinkedList`]
//!
//! `enqueue` appends at the back, `dequeue` removes from the front; both are O(1).
//!
//! ```rust
//! use rust_basic_collections::queue::Queue;
//!
//! let mut queue = Queue::new();
//! queue.enqueue(1);
//! queue.enqueue(2);
//! assert_eq!(queue.dequeue(), Ok(1));
//! assert_eq!(queue.to_string(), "[2]");
//! ```

use std::fmt;

use crate::linked_list::{self, LinkedList};
use crate::traits::{fmt_items, Result, Sequence};

/// A first-in, first-out queue
#[derive(Clone, PartialEq, Eq)]
pub struct Queue<T> {
    list: LinkedList<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Adds an element at the back
    pub fn enqueue(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Removes and returns the element at the front
    ///
    /// # Errors
    /// Returns [`CollectionError::EmptyCollection`](crate::CollectionError::EmptyCollection)
    /// if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        self.list.pop_front()
    }

    /// Returns the element at the front without removing it
    pub fn peek(&self) -> Result<&T> {
        self.list.first()
    }

    /// Number of queued elements
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if nothing is waiting in the queue
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Drops every queued element
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Iterates from front (next to dequeue) to back
    pub fn iter(&self) -> linked_list::Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_items(f, self.iter())
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = linked_list::IntoIter<T>;

    /// Yields elements in dequeue order
    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = linked_list::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::CollectionError;

    #[test]
    fn test_fifo_order() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek(), Ok(&1));
        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.dequeue(), Ok(2));
        assert_eq!(queue.dequeue(), Ok(3));
        assert_eq!(queue.dequeue(), Err(CollectionError::EmptyCollection));
        assert_eq!(queue.peek(), Err(CollectionError::EmptyCollection));
    }

    #[test]
    fn test_interleaved() {
        let mut queue = Queue::new();
        queue.enqueue('a');
        queue.enqueue('b');
        assert_eq!(queue.dequeue(), Ok('a'));
        queue.enqueue('c');
        assert_eq!(queue.iter().copied().collect::<String>(), "bc");
        assert_eq!(queue.into_iter().collect::<String>(), "bc");
    }

    #[test]
    fn test_clear() {
        let mut queue: Queue<i32> = (0..5).collect();
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), Err(CollectionError::EmptyCollection));
    }

    #[test]
    fn test_display_does_not_drain() {
        let queue: Queue<i32> = (1..=3).collect();
        assert_eq!(queue.to_string(), "[1, 2, 3]");
        assert_eq!(queue.len(), 3);
    }
}
