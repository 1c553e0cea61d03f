//! LIFO stack over [`LinkedList`]
//!
//! The top of the stack is the front of the list, so `push` and `pop` are O(1).

use std::fmt;

use crate::linked_list::{self, LinkedList};
use crate::traits::{fmt_items, Result, Sequence};

/// A last-in, first-out stack
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    list: LinkedList<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Pushes an element onto the top
    pub fn push(&mut self, value: T) {
        self.list.push_front(value);
    }

    /// Removes and returns the top element
    ///
    /// # Errors
    /// Returns [`CollectionError::EmptyCollection`](crate::CollectionError::EmptyCollection)
    /// if the stack is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.list.pop_front()
    }

    /// Returns the top element without removing it
    pub fn peek(&self) -> Result<&T> {
        self.list.first()
    }

    /// Number of elements on the stack
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the stack holds nothing
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Drops every element on the stack
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Iterates from the top of the stack down
    pub fn iter(&self) -> linked_list::Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_items(f, self.iter())
    }
}

impl<T> Extend<T> for Stack<T> {
    /// Pushes each element in turn, so the last one ends up on top
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = linked_list::IntoIter<T>;

    /// Yields elements in pop order
    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = linked_list::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
