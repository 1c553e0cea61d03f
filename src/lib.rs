//! Basic Collections for Rust
//!
//! This crate provides a small set of generic containers built from first principles,
//! each maintaining its structural invariants explicitly rather than delegating to
//! the standard collections.
//!
//! # Containers
//!
//! - **Array List**: contiguous slot buffer with doubling growth; O(1) indexed access,
//!   O(1) amortized append, O(n) positional insert/remove
//! - **Linked List**: doubly-linked nodes in a slotmap arena addressed by generational
//!   handles; O(1) ends access and O(1) splicing next to a handle
//! - **Min-Heap**: binary heap laid out in an array list; O(log n) insert and extract
//! - **Queue / Stack**: FIFO and LIFO adapters over the linked list
//!
//! The array list and linked list share the [`Sequence`] trait, so the same code can
//! run on either. Every precondition failure is reported as a [`CollectionError`];
//! nothing is clamped, retried or logged.
//!
//! The containers are single-threaded and perform no internal synchronization.
//!
//! # Example
//!
//! ```rust
//! use rust_basic_collections::min_heap::MinHeap;
//! use rust_basic_collections::queue::Queue;
//! use rust_basic_collections::stack::Stack;
//! use rust_basic_collections::CollectionError;
//!
//! let mut heap = MinHeap::new();
//! for value in [10, 20, 5, 15, 30] {
//!     heap.insert(value);
//! }
//! assert_eq!(heap.into_sorted_vec(), vec![5, 10, 15, 20, 30]);
//!
//! let mut queue: Queue<i32> = (1..=3).collect();
//! let mut stack: Stack<i32> = (1..=3).collect();
//! assert_eq!(queue.dequeue(), Ok(1));
//! assert_eq!(stack.pop(), Ok(3));
//! assert_eq!(Queue::<i32>::new().dequeue(), Err(CollectionError::EmptyCollection));
//! ```

pub mod array_list;
pub mod linked_list;
pub mod min_heap;
pub mod queue;
pub mod stack;
pub mod traits;

// Re-export the main trait for convenience
pub use traits::{CollectionError, Result, Sequence};
