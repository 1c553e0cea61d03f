//! Arena-backed doubly-linked list
//!
//! Nodes live in a [`SlotMap`] owned by the list and refer to each other through
//! generational [`NodeHandle`]s instead of pointers. An absent neighbour is the
//! null handle, so the two ends of the chain are marked by `head.prev` and
//! `tail.next` being null.
//!
//! For every linked node `n` the list maintains:
//! - `n.next.prev == n` whenever `n.next` is present
//! - `n.prev.next == n` whenever `n.prev` is present
//! - walking `next` from `head` visits exactly `len()` nodes and ends at `tail`
//!
//! Handles stay valid until their node is removed; a removed node's slot is
//! reused with a new generation, so stale handles are detected rather than
//! silently aliasing a different element.
//!
//! # Time Complexity
//!
//! | Operation                      | Complexity            |
//! |--------------------------------|-----------------------|
//! | `push_front` / `push_back`     | O(1)                  |
//! | `pop_front` / `pop_back`       | O(1)                  |
//! | `first` / `last`               | O(1)                  |
//! | `get` / `set` / `insert` / `remove` | O(min(i, len - i)) |
//! | `insert_before` / `insert_after` / `remove_by_handle` | O(1) |
//! | `sort`                         | O(n log n)            |
//!
//! # Example
//!
//! ```rust
//! use rust_basic_collections::Sequence;
//! use rust_basic_collections::linked_list::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.push_back(1);
//! let three = list.push_back_with_handle(3);
//! list.insert_before(three, 2).unwrap();
//!
//! assert_eq!(list.to_vec(), vec![1, 2, 3]);
//! assert_eq!(list.remove_by_handle(three), Ok(3));
//! assert_eq!(list.last(), Ok(&2));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::trace;
use slotmap::{new_key_type, Key, SlotMap};

use crate::traits::{fmt_items, CollectionError, Result, Sequence};

new_key_type! {
    /// Stable handle to a node of a [`LinkedList`]
    pub struct NodeHandle;
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: NodeHandle,
    next: NodeHandle,
}

/// A doubly-linked list whose nodes live in an arena
///
/// Handles returned by the `*_with_handle` and `insert_*` methods address a node
/// directly, giving O(1) splicing next to it. A handle is only meaningful for the
/// list that produced it.
#[derive(Clone)]
pub struct LinkedList<T> {
    nodes: SlotMap<NodeHandle, Node<T>>,
    head: NodeHandle,
    tail: NodeHandle,
}

impl<T> LinkedList<T> {
    /// Prepends `value` and returns the handle of its node
    pub fn push_front_with_handle(&mut self, value: T) -> NodeHandle {
        let old_head = self.head;
        let handle = self.nodes.insert(Node {
            value,
            prev: NodeHandle::null(),
            next: old_head,
        });
        match self.nodes.get_mut(old_head) {
            Some(node) => node.prev = handle,
            None => self.tail = handle,
        }
        self.head = handle;
        handle
    }

    /// Appends `value` and returns the handle of its node
    pub fn push_back_with_handle(&mut self, value: T) -> NodeHandle {
        let old_tail = self.tail;
        let handle = self.nodes.insert(Node {
            value,
            prev: old_tail,
            next: NodeHandle::null(),
        });
        match self.nodes.get_mut(old_tail) {
            Some(node) => node.next = handle,
            None => self.head = handle,
        }
        self.tail = handle;
        handle
    }

    /// Returns the handle of the first node
    pub fn front_handle(&self) -> Option<NodeHandle> {
        self.present(self.head)
    }

    /// Returns the handle of the last node
    pub fn back_handle(&self) -> Option<NodeHandle> {
        self.present(self.tail)
    }

    /// Returns true if `handle` refers to a node currently in this list
    pub fn contains_handle(&self, handle: NodeHandle) -> bool {
        self.nodes.contains_key(handle)
    }

    /// Returns the handle of the node at `index`
    ///
    /// Walks from whichever end is closer: from the head when
    /// `index < len / 2`, otherwise from the tail.
    pub fn handle_at(&self, index: usize) -> Result<NodeHandle> {
        let len = self.nodes.len();
        if index >= len {
            return Err(CollectionError::OutOfRange { index, len });
        }
        let mut cursor;
        if index < len / 2 {
            cursor = self.head;
            for _ in 0..index {
                cursor = self.nodes[cursor].next;
            }
        } else {
            cursor = self.tail;
            for _ in index..len - 1 {
                cursor = self.nodes[cursor].prev;
            }
        }
        Ok(cursor)
    }

    /// Returns the handle following `handle`, or `None` at the tail
    pub fn next_handle(&self, handle: NodeHandle) -> Result<Option<NodeHandle>> {
        let node = self.node(handle)?;
        Ok(self.present(node.next))
    }

    /// Returns the handle preceding `handle`, or `None` at the head
    pub fn prev_handle(&self, handle: NodeHandle) -> Result<Option<NodeHandle>> {
        let node = self.node(handle)?;
        Ok(self.present(node.prev))
    }

    /// Returns the value stored in the node behind `handle`
    pub fn get_by_handle(&self, handle: NodeHandle) -> Result<&T> {
        self.node(handle).map(|node| &node.value)
    }

    /// Returns the value stored in the node behind `handle`, mutably
    pub fn get_by_handle_mut(&mut self, handle: NodeHandle) -> Result<&mut T> {
        self.nodes
            .get_mut(handle)
            .map(|node| &mut node.value)
            .ok_or(CollectionError::InvalidHandle)
    }

    /// Links a new node holding `value` directly before `successor`
    pub fn insert_before(&mut self, successor: NodeHandle, value: T) -> Result<NodeHandle> {
        let predecessor = self.node(successor)?.prev;
        let handle = self.nodes.insert(Node {
            value,
            prev: predecessor,
            next: successor,
        });
        self.nodes[successor].prev = handle;
        match self.nodes.get_mut(predecessor) {
            Some(node) => node.next = handle,
            None => self.head = handle,
        }
        Ok(handle)
    }

    /// Links a new node holding `value` directly after `predecessor`
    pub fn insert_after(&mut self, predecessor: NodeHandle, value: T) -> Result<NodeHandle> {
        let successor = self.node(predecessor)?.next;
        let handle = self.nodes.insert(Node {
            value,
            prev: predecessor,
            next: successor,
        });
        self.nodes[predecessor].next = handle;
        match self.nodes.get_mut(successor) {
            Some(node) => node.prev = handle,
            None => self.tail = handle,
        }
        Ok(handle)
    }

    /// Unlinks the node behind `handle` and returns its value
    pub fn remove_by_handle(&mut self, handle: NodeHandle) -> Result<T> {
        self.unlink(handle).ok_or(CollectionError::InvalidHandle)
    }

    fn node(&self, handle: NodeHandle) -> Result<&Node<T>> {
        self.nodes.get(handle).ok_or(CollectionError::InvalidHandle)
    }

    fn present(&self, handle: NodeHandle) -> Option<NodeHandle> {
        if handle.is_null() {
            None
        } else {
            Some(handle)
        }
    }

    /// Detaches a node, re-anchoring the ends when it was the head or tail
    fn unlink(&mut self, handle: NodeHandle) -> Option<T> {
        let node = self.nodes.remove(handle)?;
        match self.nodes.get_mut(node.prev) {
            Some(prev) => prev.next = node.next,
            None => self.head = node.next,
        }
        match self.nodes.get_mut(node.next) {
            Some(next) => next.prev = node.prev,
            None => self.tail = node.prev,
        }
        Some(node.value)
    }

    /// Handles in list order
    fn handles(&self) -> Handles<'_, T> {
        Handles {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }
}

impl<T> Sequence<T> for LinkedList<T> {
    type Iter<'a> = Iter<'a, T> where T: 'a;

    fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: NodeHandle::null(),
            tail: NodeHandle::null(),
        }
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn push_back(&mut self, value: T) {
        self.push_back_with_handle(value);
    }

    fn push_front(&mut self, value: T) {
        self.push_front_with_handle(value);
    }

    fn get(&self, index: usize) -> Result<&T> {
        let handle = self.handle_at(index)?;
        Ok(&self.nodes[handle].value)
    }

    fn set(&mut self, index: usize, value: T) -> Result<T> {
        let handle = self.handle_at(index)?;
        Ok(mem::replace(&mut self.nodes[handle].value, value))
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.nodes.len();
        if index > len {
            return Err(CollectionError::OutOfRange { index, len });
        }
        if index == len {
            self.push_back_with_handle(value);
        } else {
            let successor = self.handle_at(index)?;
            self.insert_before(successor, value)?;
        }
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        let handle = self.handle_at(index)?;
        self.remove_by_handle(handle)
    }

    fn first(&self) -> Result<&T> {
        self.nodes
            .get(self.head)
            .map(|node| &node.value)
            .ok_or(CollectionError::EmptyCollection)
    }

    fn last(&self) -> Result<&T> {
        self.nodes
            .get(self.tail)
            .map(|node| &node.value)
            .ok_or(CollectionError::EmptyCollection)
    }

    fn pop_front(&mut self) -> Result<T> {
        self.unlink(self.head)
            .ok_or(CollectionError::EmptyCollection)
    }

    fn pop_back(&mut self) -> Result<T> {
        self.unlink(self.tail)
            .ok_or(CollectionError::EmptyCollection)
    }

    /// Sorts payloads in place; node handles and links are left untouched
    ///
    /// The permutation is computed over positions first, then applied by
    /// swapping values along each cycle, so every handle keeps addressing the
    /// same position in the chain.
    fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = self.nodes.len();
        if len <= 1 {
            return;
        }
        let handles: Vec<NodeHandle> = self.handles().collect();
        let mut order: Vec<usize> = (0..len).collect();
        order.sort_by(|&a, &b| {
            compare(
                &self.nodes[handles[a]].value,
                &self.nodes[handles[b]].value,
            )
        });

        // Position i takes the value currently held at order[i].
        let mut placed = vec![false; len];
        let mut swaps = 0usize;
        for start in 0..len {
            if placed[start] {
                continue;
            }
            let mut current = start;
            while order[current] != start {
                let source = order[current];
                if let Some([dst, src]) = self
                    .nodes
                    .get_disjoint_mut([handles[current], handles[source]])
                {
                    mem::swap(&mut dst.value, &mut src.value);
                    swaps += 1;
                }
                placed[current] = true;
                current = source;
            }
            placed[current] = true;
        }

        trace!("linked list sorted {} nodes with {} swaps", len, swaps);
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.head = NodeHandle::null();
        self.tail = NodeHandle::null();
    }

    fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.nodes.len(),
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_items(f, self.iter())
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back_with_handle(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

struct Handles<'a, T> {
    nodes: &'a SlotMap<NodeHandle, Node<T>>,
    cursor: NodeHandle,
}

impl<T> Iterator for Handles<'_, T> {
    type Item = NodeHandle;

    fn next(&mut self) -> Option<NodeHandle> {
        let node = self.nodes.get(self.cursor)?;
        let current = self.cursor;
        self.cursor = node.next;
        Some(current)
    }
}

/// Borrowing iterator over a [`LinkedList`]
///
/// Walks the chain from both ends and stops once the two cursors have
/// yielded `len()` values between them.
pub struct Iter<'a, T> {
    nodes: &'a SlotMap<NodeHandle, Node<T>>,
    front: NodeHandle,
    back: NodeHandle,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.front)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.back)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Owning iterator over a [`LinkedList`]
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}
