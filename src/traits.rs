//! Common traits for sequence containers
//!
//! This module provides the shared surface of the two ordered sequences in this crate:
//!
//! - [`CollectionError`]: the error taxonomy every fallible operation reports
//! - [`Sequence`]: positional access, ends access, search, sort and iteration
//!
//! [`ArrayList`](crate::array_list::ArrayList) and
//! [`LinkedList`](crate::linked_list::LinkedList) both implement [`Sequence`], so
//! code written against the trait runs unchanged on either storage strategy. The
//! two differ only in cost: the array list gives O(1) positional access, the
//! linked list gives O(1) access and removal at both ends.

use std::cmp::Ordering;
use std::fmt;

/// Error type for collection operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// The index lies outside the valid bound for the operation
    ///
    /// Insertion accepts `index == len`; access and removal do not.
    OutOfRange { index: usize, len: usize },
    /// The operation needs at least one element
    EmptyCollection,
    /// A container was constructed with a zero initial capacity
    InvalidConfiguration { capacity: usize },
    /// The node handle does not belong to this list (or its node was removed)
    InvalidHandle,
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionError::OutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
            CollectionError::EmptyCollection => write!(f, "collection is empty"),
            CollectionError::InvalidConfiguration { capacity } => {
                write!(f, "initial capacity must be positive (got {})", capacity)
            }
            CollectionError::InvalidHandle => {
                write!(f, "handle is no longer valid (node was removed)")
            }
        }
    }
}

impl std::error::Error for CollectionError {}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, CollectionError>;

/// Base trait for ordered sequences
///
/// The API follows the shape of the standard collections (`push_back`, `pop_front`,
/// `first`, `last`) but every precondition is reported as a [`CollectionError`]
/// instead of a panic or a silent `None`:
///
/// - positional access outside `0..len` fails with [`CollectionError::OutOfRange`]
/// - insertion outside `0..=len` fails with [`CollectionError::OutOfRange`]
/// - ends access on an empty sequence fails with [`CollectionError::EmptyCollection`]
///
/// A failed operation never changes the sequence.
///
/// # Example
///
/// ```rust
/// use rust_basic_collections::Sequence;
/// use rust_basic_collections::linked_list::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.push_back(2);
/// list.push_front(1);
/// list.insert(2, 3).unwrap();
///
/// assert_eq!(list.first(), Ok(&1));
/// assert_eq!(list.last(), Ok(&3));
/// assert_eq!(list.remove(1), Ok(2));
/// assert!(list.get(5).is_err());
/// ```
pub trait Sequence<T> {
    /// Borrowing front-to-back iterator
    type Iter<'a>: DoubleEndedIterator<Item = &'a T> + ExactSizeIterator
    where
        Self: 'a,
        T: 'a;

    /// Creates a new empty sequence
    fn new() -> Self;

    /// Returns the number of elements
    fn len(&self) -> usize;

    /// Returns true if the sequence holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends an element at the back
    ///
    /// # Time Complexity
    /// O(1) amortized for the array list, O(1) for the linked list.
    fn push_back(&mut self, value: T);

    /// Prepends an element at the front
    ///
    /// # Time Complexity
    /// O(n) for the array list, O(1) for the linked list.
    fn push_front(&mut self, value: T);

    /// Returns a reference to the element at `index`
    fn get(&self, index: usize) -> Result<&T>;

    /// Replaces the element at `index`, returning the previous value
    fn set(&mut self, index: usize, value: T) -> Result<T>;

    /// Inserts `value` so that it ends up at `index`, shifting later elements back
    ///
    /// `index == len()` appends.
    fn insert(&mut self, index: usize, value: T) -> Result<()>;

    /// Removes and returns the element at `index`, shifting later elements forward
    fn remove(&mut self, index: usize) -> Result<T>;

    /// Returns the first element
    fn first(&self) -> Result<&T>;

    /// Returns the last element
    fn last(&self) -> Result<&T>;

    /// Removes and returns the first element
    fn pop_front(&mut self) -> Result<T>;

    /// Removes and returns the last element
    fn pop_back(&mut self) -> Result<T>;

    /// Reorders the elements under `compare`
    ///
    /// Only the order changes: length and membership are preserved.
    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    /// Removes every element
    fn clear(&mut self);

    /// Returns a front-to-back iterator
    ///
    /// The iterator borrows the sequence, so structural mutation while it is
    /// alive is rejected at compile time.
    fn iter(&self) -> Self::Iter<'_>;

    /// Reorders the elements by their natural order
    fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(Ord::cmp);
    }

    /// Returns the index of the first element equal to `target`
    fn index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|value| value == target)
    }

    /// Returns the index of the last element equal to `target`
    fn last_index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().rposition(|value| value == target)
    }

    /// Returns true if some element equals `target`
    fn contains(&self, target: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(target).is_some()
    }

    /// Copies the elements into a `Vec`, front to back
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

/// Writes `items` as `[a, b, c]`
pub(crate) fn fmt_items<'a, T, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    write!(f, "[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "]")
}
