// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `DynamicArrayList<T>`: an indexable, resizable sequence over one contiguous buffer.
//!
//! # Storage
//!
//! ```text
//!            len = 3                capacity = 4
//!  ┌─────────┬─────────┬─────────┬─────────┐
//!  │ Some(a) │ Some(b) │ Some(c) │  None   │
//!  └─────────┴─────────┴─────────┴─────────┘
//!   ◀──── logical elements ────▶  ◀ spare ▶
//! ```
//!
//! The buffer is a boxed slice of exactly `capacity` slots. Slots `[0, len)` hold
//! the elements in insertion order, slots `[len, capacity)` are `None`. Emptying a
//! slot drops the element it held, so `clear` and `remove_at` never keep removed
//! values alive.
//!
//! # Growth
//!
//! When an insertion finds `len == capacity`, a buffer of `GROWTH_FACTOR * capacity`
//! slots is allocated and every old slot is moved into its prefix. Capacity never
//! shrinks.

use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use crate::equality::equals;
use crate::error::{ListError, Operation, Result};
use crate::iter::{Iter, IterMut};
use crate::verify::contracts::{
    check_growth, check_length_delta, check_list_invariants, check_occupied,
    check_search_result, check_slots_cleared,
};
use crate::verify::{check_slots, InvariantError};

/// Capacity used by [`DynamicArrayList::new`].
pub const DEFAULT_CAPACITY: usize = 4;

/// Smallest capacity a list may be created with.
pub const MIN_CAPACITY: usize = 2;

/// Factor applied to the capacity on every growth.
pub const GROWTH_FACTOR: usize = 2;

/// A growable list backed by a contiguous buffer that doubles on overflow.
///
/// Fallible operations return [`ListError`] and leave the list untouched on error.
///
/// ```
/// use dynlist::DynamicArrayList;
///
/// let mut list = DynamicArrayList::new();
/// list.push("1");
/// list.push("2");
/// list.push("3");
/// list.insert(1, "87").unwrap();
///
/// assert_eq!(list, ["1", "87", "2", "3"]);
/// assert_eq!(list.index_of(&"2"), Some(2));
/// assert_eq!(list.capacity(), 4);
/// ```
#[derive(Clone)]
pub struct DynamicArrayList<T> {
    buffer: Box<[Option<T>]>,
    len: usize,
}

fn empty_buffer<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> DynamicArrayList<T> {
    /// Create an empty list with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self {
            buffer: empty_buffer(DEFAULT_CAPACITY),
            len: 0,
        }
    }

    /// Create an empty list with exactly `initial_capacity` slots.
    ///
    /// Fails with [`ListError::InvalidArgument`] if `initial_capacity < MIN_CAPACITY`.
    pub fn with_capacity(initial_capacity: usize) -> Result<Self> {
        if initial_capacity < MIN_CAPACITY {
            return Err(ListError::InvalidArgument {
                parameter: "initial_capacity",
                reason: format!(
                    "cannot be less than {}, got {}",
                    MIN_CAPACITY, initial_capacity
                ),
            });
        }

        let list = Self {
            buffer: empty_buffer(initial_capacity),
            len: 0,
        };
        check_list_invariants(list.len, list.capacity());
        Ok(list)
    }

    /// Number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of slots in the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Always `false`: the list is mutable through every handle that owns it.
    #[inline]
    pub fn is_read_only(&self) -> bool {
        false
    }

    /// Append `item` at the end, doubling the buffer first if it is full.
    pub fn push(&mut self, item: T) {
        let old_len = self.len;
        if self.len == self.capacity() {
            self.grow();
        }

        self.buffer[self.len] = Some(item);
        self.len += 1;

        check_length_delta(old_len, self.len, 1);
        check_occupied(&self.buffer, self.len - 1);
        check_list_invariants(self.len, self.capacity());
    }

    /// Double the buffer and move every old slot into the new prefix.
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity
            .checked_mul(GROWTH_FACTOR)
            .expect("capacity overflow");

        let mut grown = empty_buffer(new_capacity);
        for (target, source) in grown.iter_mut().zip(self.buffer.iter_mut()) {
            *target = source.take();
        }
        self.buffer = grown;

        tracing::trace!(old_capacity, new_capacity, len = self.len, "grew buffer");
        check_growth(old_capacity, self.capacity());
        check_slots_cleared(&self.buffer, self.len);
    }

    /// Reference to the element at `index`.
    ///
    /// Valid range is `[0, len)`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.buffer[..self.len]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or_else(|| ListError::out_of_range(Operation::Get, index, self.len))
    }

    /// Mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.buffer[..len]
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or_else(|| ListError::out_of_range(Operation::Get, index, len))
    }

    /// Store `value` at `index`.
    ///
    /// Valid range is `[0, len]`: `index == len` appends, anything below
    /// overwrites (dropping the old element) without changing the length.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(Operation::Set, index)?;

        if index == self.len {
            self.push(value);
            return Ok(());
        }

        self.buffer[index] = Some(value);
        check_occupied(&self.buffer, index);
        Ok(())
    }

    /// Insert `item` at `index`, shifting `[index, len)` one slot to the right.
    ///
    /// Valid range is `[0, len]`.
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        self.check_index(Operation::Insert, index)?;

        let old_len = self.len;
        if self.len == self.capacity() {
            self.grow();
        }

        // INVARIANT: slot `len` is empty here, so parking the item there loses nothing.
        self.buffer[self.len] = Some(item);
        self.buffer[index..=self.len].rotate_right(1);
        self.len += 1;

        check_length_delta(old_len, self.len, 1);
        check_occupied(&self.buffer, index);
        check_list_invariants(self.len, self.capacity());
        Ok(())
    }

    /// Remove and return the element at `index`, shifting `(index, len)` one slot left.
    ///
    /// Valid range is `[0, len)`. The vacated tail slot is emptied.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_index(Operation::RemoveAt, index)?;

        let Some(removed) = self.buffer[index].take() else {
            return Err(ListError::out_of_range(Operation::RemoveAt, index, self.len));
        };

        let old_len = self.len;
        // INVARIANT: the emptied slot travels to `len - 1`, so nothing stale survives.
        self.buffer[index..self.len].rotate_left(1);
        self.len -= 1;

        check_length_delta(old_len, self.len, -1);
        check_slots_cleared(&self.buffer, self.len);
        check_list_invariants(self.len, self.capacity());
        Ok(removed)
    }

    /// Drop every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        let cleared = self.len;
        self.buffer[..self.len].fill_with(|| None);
        self.len = 0;

        tracing::debug!(cleared, capacity = self.capacity(), "cleared list");
        check_slots_cleared(&self.buffer, 0);
        check_list_invariants(self.len, self.capacity());
    }

    /// Iterate over the elements present when the call is made.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.buffer[..self.len])
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.buffer[..self.len])
    }

    pub fn first(&self) -> Option<&T> {
        self.get(0).ok()
    }

    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|index| self.get(index).ok())
    }

    /// Check every structural invariant, reporting the first violation.
    pub fn verify(&self) -> std::result::Result<(), InvariantError> {
        check_slots(&self.buffer, self.len)
    }

    /// Reject indices outside the operation's valid range.
    fn check_index(&self, operation: Operation, index: usize) -> Result<()> {
        let in_range = if operation.allows_end() {
            index <= self.len
        } else {
            index < self.len
        };
        if in_range {
            Ok(())
        } else {
            Err(ListError::out_of_range(operation, index, self.len))
        }
    }

    pub(crate) fn into_parts(self) -> (Box<[Option<T>]>, usize) {
        (self.buffer, self.len)
    }
}

impl<T: PartialEq> DynamicArrayList<T> {
    /// Index of the first element equal to `item`, or `None`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        let found = self.iter().position(|element| equals(item, element));
        check_search_result(found, self.len);
        found
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Remove the first element equal to `item`.
    ///
    /// Returns `false`, leaving the list untouched, when nothing matches.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.index_of(item) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }
}

impl<T: Clone> DynamicArrayList<T> {
    /// Clone every element into `destination[dest_offset..dest_offset + len]`.
    ///
    /// Slots of `destination` outside that range are left as they were. Pass
    /// `None` for an absent destination.
    ///
    /// ```
    /// use dynlist::DynamicArrayList;
    ///
    /// let list: DynamicArrayList<i32> = [3, 4, 5].into();
    /// let mut target = [1, 2, 0, 0, 0];
    /// list.copy_to(&mut target[..], 2).unwrap();
    /// assert_eq!(target, [1, 2, 3, 4, 5]);
    /// ```
    pub fn copy_to<'a>(
        &self,
        destination: impl Into<Option<&'a mut [T]>>,
        dest_offset: usize,
    ) -> Result<()>
    where
        T: 'a,
    {
        let Some(destination) = destination.into() else {
            return Err(ListError::NullTarget {
                parameter: "destination",
            });
        };

        if dest_offset > destination.len() {
            return Err(ListError::InvalidArgument {
                parameter: "dest_offset",
                reason: format!(
                    "offset {} is past the end of a destination of length {}",
                    dest_offset,
                    destination.len()
                ),
            });
        }

        let available = destination.len() - dest_offset;
        if available < self.len {
            return Err(ListError::InsufficientCapacity {
                available,
                required: self.len,
            });
        }

        for (target, element) in destination[dest_offset..].iter_mut().zip(self.iter()) {
            target.clone_from(element);
        }
        Ok(())
    }

    /// Copy the logical elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for DynamicArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for DynamicArrayList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Equality and hashing look at the logical elements only; capacity is not part
// of a list's value.

impl<T: PartialEq> PartialEq for DynamicArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicArrayList<T> {}

impl<T: PartialEq> PartialEq<[T]> for DynamicArrayList<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for DynamicArrayList<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == other[..]
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynamicArrayList<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

impl<T: Hash> Hash for DynamicArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for element in self.iter() {
            element.hash(state);
        }
    }
}

impl<T> Index<usize> for DynamicArrayList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArrayList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(element) => element,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> FromIterator<T> for DynamicArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DynamicArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DynamicArrayList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> From<Vec<T>> for DynamicArrayList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArrayList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}
