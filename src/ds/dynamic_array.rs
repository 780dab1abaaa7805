//! Contiguous, index-addressable sequence with doubling growth.
//!
//! Stores elements in a fixed block of slots and tracks how many of them are
//! live. Appends are amortized O(1): when every slot is occupied the block is
//! reallocated at twice its capacity.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                  DynamicArray<T> (capacity = 8)                   │
//! │                                                                   │
//! │   Index:    0     1     2     3     4     5     6     7           │
//! │           ┌─────┬─────┬─────┬─────┬─────┬─────┬─────┬─────┐       │
//! │   slots:  │  a  │  b  │  c  │  d  │  e  │  -  │  -  │  -  │       │
//! │           └─────┴─────┴─────┴─────┴─────┴─────┴─────┴─────┘       │
//! │            ◄──────── live [0, len) ───────►◄── spare ──►          │
//! │                                                                   │
//! │   insert(1, x):  [a, x, b, c, d, e]      tail shifted right       │
//! │   remove_at(0):  [x, b, c, d, e, -]      tail shifted left,       │
//! │                                          vacated slot cleared     │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//!
//! | Operation            | Description                       | Complexity   |
//! |----------------------|-----------------------------------|--------------|
//! | [`get`] / [`set`]    | Checked index access              | O(1)         |
//! | [`add`]              | Append, doubling when full        | O(1) amort.  |
//! | [`insert`]           | Insert at `index <= len`          | O(len-index) |
//! | [`remove_at`]        | Remove at `index < len`           | O(len-index) |
//! | [`remove`]           | Remove first equal element        | O(len)       |
//! | [`index_of`]         | First position of an element      | O(len)       |
//! | [`copy_to`]          | Clone live elements into a slice  | O(len)       |
//!
//! [`get`]: DynamicArray::get
//! [`set`]: DynamicArray::set
//! [`add`]: DynamicArray::add
//! [`insert`]: DynamicArray::insert
//! [`remove_at`]: DynamicArray::remove_at
//! [`remove`]: DynamicArray::remove
//! [`index_of`]: DynamicArray::index_of
//! [`copy_to`]: DynamicArray::copy_to
//!
//! ## Example Usage
//!
//! ```
//! use ringkit::ds::DynamicArray;
//!
//! let mut array = DynamicArray::new();
//! for v in [3, 1, 4] {
//!     array.add(v);
//! }
//! array.insert(1, 9).unwrap();
//! assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![3, 9, 1, 4]);
//!
//! assert_eq!(array.remove_at(0), Ok(3));
//! assert!(array.remove(&4));
//! assert_eq!(array.len(), 2);
//! ```
//!
//! ## Thread Safety
//!
//! `DynamicArray` is not thread-safe; callers serialize access externally.

use std::ops::{Index, IndexMut};

use crate::error::{CollectionError, InvariantError};

/// Capacity an empty array starts with and returns to on [`DynamicArray::clear`].
pub const DEFAULT_ARRAY_CAPACITY: usize = 8;

/// Resizable array of `T` with amortized O(1) append.
///
/// Slots `[0, len)` always hold a value; slots `[len, capacity)` are empty.
#[derive(Debug, Clone)]
pub struct DynamicArray<T> {
    slots: Vec<Option<T>>,
    len: usize,
    base_capacity: usize,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array with [`DEFAULT_ARRAY_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_base_capacity(DEFAULT_ARRAY_CAPACITY)
    }

    /// Creates an empty array whose initial (and post-`clear`) capacity is
    /// `base_capacity`. A zero base is raised to one so doubling makes progress.
    pub fn with_base_capacity(base_capacity: usize) -> Self {
        let base_capacity = base_capacity.max(1);
        Self {
            slots: empty_slots(base_capacity),
            len: 0,
            base_capacity,
        }
    }

    /// Builds an array from an owned vector.
    ///
    /// Capacity is twice the element count (or the default base when empty)
    /// so near-term appends do not reallocate.
    pub fn from_vec(values: Vec<T>) -> Self {
        let len = values.len();
        let capacity = if len == 0 {
            DEFAULT_ARRAY_CAPACITY
        } else {
            len.saturating_mul(2)
        };
        let mut slots = Vec::with_capacity(capacity);
        slots.extend(values.into_iter().map(Some));
        slots.resize_with(capacity, || None);
        Self {
            slots,
            len,
            base_capacity: DEFAULT_ARRAY_CAPACITY,
        }
    }

    /// Returns the number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the capacity restored by [`clear`](Self::clear).
    pub fn base_capacity(&self) -> usize {
        self.base_capacity
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfRange`] when `index >= len`.
    ///
    /// # Example
    ///
    /// ```
    /// use ringkit::ds::DynamicArray;
    ///
    /// let array: DynamicArray<_> = ["a", "b"].into_iter().collect();
    /// assert_eq!(array.get(1), Ok(&"b"));
    /// assert!(array.get(2).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        if index >= self.len {
            return Err(CollectionError::out_of_range(index, self.len));
        }
        self.slots[index]
            .as_ref()
            .ok_or(CollectionError::out_of_range(index, self.len))
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, CollectionError> {
        let len = self.len;
        if index >= len {
            return Err(CollectionError::out_of_range(index, len));
        }
        self.slots[index]
            .as_mut()
            .ok_or(CollectionError::out_of_range(index, len))
    }

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// Other indices are untouched.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, CollectionError> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Appends `value`, doubling capacity first when every slot is taken.
    pub fn add(&mut self, value: T) {
        if self.len == self.slots.len() {
            self.grow();
        }
        self.slots[self.len] = Some(value);
        self.len += 1;
    }

    /// Inserts `value` at `index`, shifting `[index, len)` right by one.
    ///
    /// `index == len` appends.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfRange`] when `index > len`; the array is
    /// left unchanged.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), CollectionError> {
        if index > self.len {
            return Err(CollectionError::out_of_range(index, self.len));
        }
        if self.len == self.slots.len() {
            self.grow();
        }
        // Write into the first spare slot, then rotate it down into place.
        self.slots[self.len] = Some(value);
        self.slots[index..=self.len].rotate_right(1);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// The vacated trailing slot is cleared so no stale value is retained.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfRange`] when `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        if index >= self.len {
            return Err(CollectionError::out_of_range(index, self.len));
        }
        let removed = self.slots[index]
            .take()
            .ok_or(CollectionError::out_of_range(index, self.len))?;
        // The emptied slot travels to position len - 1.
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        Ok(removed)
    }

    /// Drops every element and reallocates at the base capacity.
    pub fn clear(&mut self) {
        self.slots = empty_slots(self.base_capacity);
        self.len = 0;
    }

    /// Returns an iterator over live elements in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.slots[..self.len].iter(),
        }
    }

    /// Returns a mutable iterator over live elements in index order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: self.slots[..self.len].iter_mut(),
        }
    }

    /// Moves the live elements out into a `Vec`, consuming the array.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Returns an approximate memory footprint in bytes.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.slots.capacity() * std::mem::size_of::<Option<T>>()
    }

    /// Verifies the live/spare slot layout.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.len > self.slots.len() {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.len,
                self.slots.len()
            )));
        }
        if let Some(pos) = self.slots[..self.len].iter().position(Option::is_none) {
            return Err(InvariantError::new(format!("live slot {pos} is empty")));
        }
        if let Some(pos) = self.slots[self.len..].iter().position(Option::is_some) {
            return Err(InvariantError::new(format!(
                "spare slot {} holds a stale value",
                self.len + pos
            )));
        }
        Ok(())
    }

    fn grow(&mut self) {
        let old_capacity = self.slots.len();
        let new_capacity = old_capacity.max(1).saturating_mul(2);
        tracing::trace!(old_capacity, new_capacity, "dynamic array grow");
        self.slots.resize_with(new_capacity, || None);
    }
}

impl<T: Default> DynamicArray<T> {
    /// Creates an array of `size` default values with capacity `2 * size`.
    ///
    /// `size == 0` yields an empty array at the default capacity.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Argument`] when `2 * size` cannot be allocated.
    ///
    /// # Example
    ///
    /// ```
    /// use ringkit::ds::DynamicArray;
    ///
    /// let array: DynamicArray<u8> = DynamicArray::with_size(3).unwrap();
    /// assert_eq!(array.len(), 3);
    /// assert_eq!(array.capacity(), 6);
    /// assert!(DynamicArray::<u8>::with_size(usize::MAX).is_err());
    /// ```
    pub fn with_size(size: usize) -> Result<Self, CollectionError> {
        if size == 0 {
            return Ok(Self::new());
        }
        let capacity = checked_presize::<T>(size)?;
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(size, || Some(T::default()));
        slots.resize_with(capacity, || None);
        Ok(Self {
            slots,
            len: size,
            base_capacity: DEFAULT_ARRAY_CAPACITY,
        })
    }
}

impl<T: PartialEq> DynamicArray<T> {
    /// Returns the index of the first element equal to `value`.
    ///
    /// Only the live window is scanned.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    /// Returns `true` if some live element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Removes the first element equal to `value`; returns whether one was found.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.index_of(value) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Clones the live elements into `dest[offset..offset + len]`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Argument`] when `offset > dest.len()` or fewer than
    /// `len` slots remain after `offset`. Nothing is written in that case.
    pub fn copy_to(&self, dest: &mut [T], offset: usize) -> Result<(), CollectionError> {
        check_destination(dest.len(), offset, self.len)?;
        for (slot, value) in dest[offset..].iter_mut().zip(self.iter()) {
            slot.clone_from(value);
        }
        Ok(())
    }
}

pub(crate) fn check_destination(
    dest_len: usize,
    offset: usize,
    count: usize,
) -> Result<(), CollectionError> {
    if offset > dest_len || dest_len - offset < count {
        return Err(CollectionError::argument(format!(
            "destination of length {dest_len} cannot hold {count} elements at offset {offset}"
        )));
    }
    Ok(())
}

fn checked_presize<T>(size: usize) -> Result<usize, CollectionError> {
    let slot_bytes = std::mem::size_of::<Option<T>>().max(1);
    size.checked_mul(2)
        .filter(|capacity| *capacity <= isize::MAX as usize / slot_bytes)
        .ok_or_else(|| CollectionError::argument(format!("size {size} is too large")))
}

fn empty_slots<T>(capacity: usize) -> Vec<Option<T>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

// ---------------------------------------------------------------------------
// Iterator types
// ---------------------------------------------------------------------------

/// Borrowed iterator over a [`DynamicArray`] in index order.
///
/// Created by [`DynamicArray::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Mutable iterator over a [`DynamicArray`] in index order.
///
/// Created by [`DynamicArray::iter_mut`].
#[derive(Debug)]
pub struct IterMut<'a, T> {
    inner: std::slice::IterMut<'a, Option<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().and_then(Option::as_mut)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// Owning iterator over a [`DynamicArray`] in index order.
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: std::iter::Take<std::vec::IntoIter<Option<T>>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.slots.into_iter().take(self.len),
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<T: Copy>(array: &DynamicArray<T>) -> Vec<T> {
        array.iter().copied().collect()
    }

    #[test]
    fn new_array_is_empty_with_default_capacity() {
        let array: DynamicArray<i32> = DynamicArray::new();
        assert!(array.is_empty());
        assert_eq!(array.capacity(), DEFAULT_ARRAY_CAPACITY);
        assert_eq!(array.iter().count(), 0);
    }

    #[test]
    fn add_preserves_insertion_order_across_growth() {
        let mut array = DynamicArray::new();
        for i in 0..20 {
            array.add(i);
        }
        assert_eq!(array.len(), 20);
        assert_eq!(array.capacity(), 32);
        assert_eq!(values(&array), (0..20).collect::<Vec<_>>());
        array.check_invariants().unwrap();
    }

    #[test]
    fn growth_doubles_exactly_when_full() {
        let mut array = DynamicArray::with_base_capacity(2);
        array.add(1);
        array.add(2);
        assert_eq!(array.capacity(), 2);
        array.add(3);
        assert_eq!(array.capacity(), 4);
    }

    #[test]
    fn get_and_set_check_bounds() {
        let mut array: DynamicArray<_> = vec!["a", "b", "c"].into();
        assert_eq!(array.get(0), Ok(&"a"));
        assert_eq!(
            array.get(3),
            Err(CollectionError::IndexOutOfRange { index: 3, len: 3 })
        );

        assert_eq!(array.set(1, "x"), Ok("b"));
        assert_eq!(values(&array), vec!["a", "x", "c"]);
        assert!(array.set(3, "y").is_err());
        assert_eq!(values(&array), vec!["a", "x", "c"]);
    }

    #[test]
    fn get_beyond_len_but_within_capacity_fails() {
        let mut array = DynamicArray::new();
        array.add(1);
        assert!(array.capacity() > 1);
        assert!(array.get(1).is_err());
    }

    #[test]
    fn insert_shifts_tail_right() {
        let mut array: DynamicArray<_> = vec![1, 2, 4].into();
        array.insert(2, 3).unwrap();
        array.insert(0, 0).unwrap();
        assert_eq!(values(&array), vec![0, 1, 2, 3, 4]);
        array.check_invariants().unwrap();
    }

    #[test]
    fn insert_at_len_appends() {
        let mut array: DynamicArray<_> = vec![1, 2].into();
        array.insert(2, 3).unwrap();
        assert_eq!(values(&array), vec![1, 2, 3]);
    }

    #[test]
    fn insert_past_len_fails_without_mutation() {
        let mut array: DynamicArray<_> = vec![1, 2].into();
        let err = array.insert(3, 9).unwrap_err();
        assert_eq!(err, CollectionError::IndexOutOfRange { index: 3, len: 2 });
        assert_eq!(values(&array), vec![1, 2]);
    }

    #[test]
    fn insert_into_full_array_grows() {
        let mut array = DynamicArray::with_base_capacity(2);
        array.add('a');
        array.add('c');
        array.insert(1, 'b').unwrap();
        assert_eq!(values(&array), vec!['a', 'b', 'c']);
        assert_eq!(array.capacity(), 4);
    }

    #[test]
    fn remove_at_shifts_tail_left_and_clears_slot() {
        let mut array: DynamicArray<_> = vec![10, 20, 30, 40].into();
        assert_eq!(array.remove_at(1), Ok(20));
        assert_eq!(values(&array), vec![10, 30, 40]);
        array.check_invariants().unwrap();

        assert_eq!(array.remove_at(2), Ok(40));
        assert_eq!(values(&array), vec![10, 30]);
        array.check_invariants().unwrap();
    }

    #[test]
    fn remove_at_out_of_range_fails() {
        let mut array: DynamicArray<i32> = DynamicArray::new();
        assert!(array.remove_at(0).is_err());
        array.add(1);
        assert_eq!(
            array.remove_at(1),
            Err(CollectionError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(array.len(), 1);
    }

    #[test]
    fn remove_by_value_removes_first_match() {
        let mut array: DynamicArray<_> = vec![1, 2, 1, 3].into();
        assert!(array.remove(&1));
        assert_eq!(values(&array), vec![2, 1, 3]);
        assert!(!array.remove(&7));
        assert_eq!(array.len(), 3);
    }

    #[test]
    fn contains_and_index_of_ignore_spare_slots() {
        let mut array: DynamicArray<_> = vec![Some(1), Some(2)].into();
        array.remove_at(1).unwrap();
        assert_eq!(array.index_of(&Some(1)), Some(0));
        assert!(!array.contains(&Some(2)));
        assert_eq!(array.index_of(&None), None);
    }

    #[test]
    fn clear_resets_to_base_capacity() {
        let mut array = DynamicArray::with_base_capacity(4);
        for i in 0..100 {
            array.add(i);
        }
        array.clear();
        assert!(array.is_empty());
        assert_eq!(array.capacity(), 4);
        array.add(5);
        assert_eq!(values(&array), vec![5]);
    }

    #[test]
    fn from_vec_presizes_to_twice_count() {
        let array: DynamicArray<_> = vec![1, 2, 3].into();
        assert_eq!(array.len(), 3);
        assert_eq!(array.capacity(), 6);

        let empty: DynamicArray<i32> = Vec::new().into();
        assert_eq!(empty.capacity(), DEFAULT_ARRAY_CAPACITY);
    }

    #[test]
    fn with_size_fills_defaults() {
        let array: DynamicArray<String> = DynamicArray::with_size(2).unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array.capacity(), 4);
        assert!(array.iter().all(String::is_empty));
    }

    #[test]
    fn with_size_rejects_overflowing_request() {
        let err = DynamicArray::<u8>::with_size(usize::MAX / 2 + 1).unwrap_err();
        assert!(matches!(err, CollectionError::Argument(_)));
    }

    #[test]
    fn copy_to_writes_at_offset() {
        let array: DynamicArray<_> = vec![1, 2, 3].into();
        let mut dest = [0; 5];
        array.copy_to(&mut dest, 2).unwrap();
        assert_eq!(dest, [0, 0, 1, 2, 3]);
    }

    #[test]
    fn copy_to_rejects_short_destination() {
        let array: DynamicArray<_> = vec![1, 2, 3].into();
        let mut dest = [0; 4];
        assert!(matches!(
            array.copy_to(&mut dest, 2),
            Err(CollectionError::Argument(_))
        ));
        assert!(array.copy_to(&mut dest, 9).is_err());
        assert_eq!(dest, [0; 4]);
    }

    #[test]
    fn index_operators_read_and_write() {
        let mut array: DynamicArray<_> = vec![1, 2].into();
        array[0] = 7;
        assert_eq!(array[0], 7);
        assert_eq!(array[1], 2);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_operator_panics_past_len() {
        let array: DynamicArray<i32> = DynamicArray::new();
        let _ = array[0];
    }

    #[test]
    fn iteration_is_restartable() {
        let array: DynamicArray<_> = vec![1, 2, 3].into();
        let first: Vec<_> = array.iter().collect();
        let second: Vec<_> = array.iter().collect();
        assert_eq!(first, second);
        assert_eq!(array.iter().len(), 3);
        assert_eq!(array.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn iter_mut_and_into_iter() {
        let mut array: DynamicArray<_> = vec![1, 2, 3].into();
        for v in &mut array {
            *v *= 10;
        }
        assert_eq!(array.clone().into_vec(), vec![10, 20, 30]);
        assert_eq!(array.into_iter().len(), 3);
    }

    #[test]
    fn extend_and_equality() {
        let mut a: DynamicArray<i32> = DynamicArray::new();
        a.extend([1, 2, 3]);
        let b: DynamicArray<i32> = (1..=3).collect();
        assert_eq!(a, b);
        a.add(4);
        assert_ne!(a, b);
    }
}
