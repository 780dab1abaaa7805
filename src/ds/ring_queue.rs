//! Growable ring-buffer FIFO queue.
//!
//! Live elements occupy `len` consecutive slots starting at `head`, wrapping
//! past the end of the buffer. `tail` is the slot the next enqueue writes.
//! When the buffer is full it is reallocated at twice the size and the
//! wrapped window is laid out from slot 0.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │              RingBufferQueue<T> (capacity = 4, len = 3)             │
//! │                                                                     │
//! │   Index:     0     1     2     3                                    │
//! │            ┌─────┬─────┬─────┬─────┐                                │
//! │   slots:   │  d  │  -  │  b  │  c  │                                │
//! │            └─────┴─────┴─────┴─────┘                                │
//! │               ▲     ▲     ▲                                         │
//! │               │     │     └── head = 2 (oldest)                     │
//! │               │     └──────── tail = 1 (next write)                 │
//! │               └────────────── newest                                │
//! │                                                                     │
//! │   FIFO order: b, c, d        tail = (head + len) % capacity         │
//! │                                                                     │
//! │   enqueue(e), enqueue(f): full at e, grow to 8 and linearize:       │
//! │            ┌─────┬─────┬─────┬─────┬─────┬─────┬─────┬─────┐        │
//! │   slots:   │  b  │  c  │  d  │  e  │  f  │  -  │  -  │  -  │        │
//! │            └─────┴─────┴─────┴─────┴─────┴─────┴─────┴─────┘        │
//! │   head = 0, tail = 5                                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//!
//! | Operation                      | Description                    | Complexity  |
//! |--------------------------------|--------------------------------|-------------|
//! | [`enqueue`]                    | Append at tail, grow when full | O(1) amort. |
//! | [`dequeue`] / [`try_dequeue`]  | Take oldest element            | O(1)        |
//! | [`peek`] / [`try_peek`]        | Borrow oldest element          | O(1)        |
//! | [`contains`]                   | Scan the live window           | O(len)      |
//! | [`remove`]                     | Remove first equal element     | O(capacity) |
//! | [`copy_to`]                    | Clone in FIFO order to a slice | O(len)      |
//!
//! [`enqueue`]: RingBufferQueue::enqueue
//! [`dequeue`]: RingBufferQueue::dequeue
//! [`try_dequeue`]: RingBufferQueue::try_dequeue
//! [`peek`]: RingBufferQueue::peek
//! [`try_peek`]: RingBufferQueue::try_peek
//! [`contains`]: RingBufferQueue::contains
//! [`remove`]: RingBufferQueue::remove
//! [`copy_to`]: RingBufferQueue::copy_to
//!
//! ## Example Usage
//!
//! ```
//! use ringkit::ds::RingBufferQueue;
//!
//! let mut queue = RingBufferQueue::new();
//! queue.enqueue('a');
//! queue.enqueue('b');
//! queue.enqueue('c');
//! assert_eq!(queue.dequeue(), Ok('a'));
//!
//! queue.enqueue('d');
//! assert_eq!(queue.iter().copied().collect::<String>(), "bcd");
//! ```
//!
//! ## Removal From the Middle
//!
//! [`remove`] first rotates the buffer so that `head == 0`, then closes the
//! gap with a plain left shift. Shifting by raw offsets on a wrapped window
//! would move slots that are not part of the queue.
//!
//! ## Thread Safety
//!
//! `RingBufferQueue` is not thread-safe; callers serialize access externally.

use crate::ds::dynamic_array::check_destination;
use crate::error::{CollectionError, InvariantError};

/// Capacity an empty queue starts with and returns to on [`RingBufferQueue::clear`].
pub const DEFAULT_QUEUE_CAPACITY: usize = 4;

/// FIFO queue stored in a circular buffer that doubles when full.
#[derive(Debug, Clone)]
pub struct RingBufferQueue<T> {
    slots: Vec<Option<T>>,
    head: usize,
    tail: usize,
    len: usize,
    base_capacity: usize,
}

impl<T> RingBufferQueue<T> {
    /// Creates an empty queue with [`DEFAULT_QUEUE_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_base_capacity(DEFAULT_QUEUE_CAPACITY)
    }

    /// Creates an empty queue whose initial (and post-`clear`) capacity is
    /// `base_capacity`, raised to one if zero.
    pub fn with_base_capacity(base_capacity: usize) -> Self {
        let base_capacity = base_capacity.max(1);
        Self {
            slots: empty_slots(base_capacity),
            head: 0,
            tail: 0,
            len: 0,
            base_capacity,
        }
    }

    /// Returns the number of queued elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue is empty.
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

    /// Appends `value` at the tail.
    ///
    /// # Example
    ///
    /// ```
    /// use ringkit::ds::RingBufferQueue;
    ///
    /// let mut queue = RingBufferQueue::with_base_capacity(2);
    /// queue.enqueue(1);
    /// queue.enqueue(2);
    /// queue.enqueue(3); // grows to 4 slots
    /// assert_eq!(queue.capacity(), 4);
    /// assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn enqueue(&mut self, value: T) {
        if self.len == self.slots.len() {
            self.grow();
        }
        self.slots[self.tail] = Some(value);
        self.tail = self.wrap_next(self.tail);
        self.len += 1;
    }

    /// Removes and returns the oldest element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyCollection`] when the queue is empty.
    pub fn dequeue(&mut self) -> Result<T, CollectionError> {
        self.try_dequeue().ok_or(CollectionError::EmptyCollection)
    }

    /// Removes and returns the oldest element, or `None` when empty.
    pub fn try_dequeue(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.slots[self.head].take()?;
        self.head = self.wrap_next(self.head);
        self.len -= 1;
        Some(value)
    }

    /// Returns the oldest element without removing it.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyCollection`] when the queue is empty.
    pub fn peek(&self) -> Result<&T, CollectionError> {
        self.try_peek().ok_or(CollectionError::EmptyCollection)
    }

    /// Returns the oldest element, or `None` when empty.
    pub fn try_peek(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    /// Drops every element and reallocates at the base capacity.
    pub fn clear(&mut self) {
        self.slots = empty_slots(self.base_capacity);
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    /// Returns an iterator from oldest to newest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            pos: 0,
        }
    }

    /// Returns an approximate memory footprint in bytes.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.slots.capacity() * std::mem::size_of::<Option<T>>()
    }

    /// Verifies window bookkeeping and that only live slots hold values.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let capacity = self.slots.len();
        if capacity == 0 {
            return Err(InvariantError::new("queue has zero capacity"));
        }
        if self.len > capacity {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {capacity}",
                self.len
            )));
        }
        if self.head >= capacity || self.tail >= capacity {
            return Err(InvariantError::new(format!(
                "head {} or tail {} outside capacity {capacity}",
                self.head, self.tail
            )));
        }
        if self.tail != (self.head + self.len) % capacity {
            return Err(InvariantError::new(format!(
                "tail {} != (head {} + len {}) % {capacity}",
                self.tail, self.head, self.len
            )));
        }
        for offset in 0..capacity {
            let live = offset < self.len;
            let occupied = self.slots[self.physical(offset)].is_some();
            if live != occupied {
                return Err(InvariantError::new(format!(
                    "logical slot {offset}: live={live} occupied={occupied}"
                )));
            }
        }
        Ok(())
    }

    /// Maps a logical offset from `head` to a slot index.
    #[inline]
    fn physical(&self, offset: usize) -> usize {
        (self.head + offset) % self.slots.len()
    }

    #[inline]
    fn wrap_next(&self, index: usize) -> usize {
        if index + 1 == self.slots.len() {
            0
        } else {
            index + 1
        }
    }

    fn grow(&mut self) {
        let old_capacity = self.slots.len();
        let new_capacity = old_capacity.saturating_mul(2).max(1);
        tracing::trace!(old_capacity, new_capacity, len = self.len, "ring queue grow");

        self.linearize();
        self.slots.resize_with(new_capacity, || None);
        self.tail = self.len % new_capacity;
    }

    /// Rotates the buffer so the oldest element sits at slot 0.
    fn linearize(&mut self) {
        if self.head != 0 {
            self.slots.rotate_left(self.head);
            self.head = 0;
            self.tail = self.len % self.slots.len();
        }
    }
}

impl<T: PartialEq> RingBufferQueue<T> {
    /// Returns `true` if some queued element equals `value`.
    ///
    /// Stale slots outside the live window are never inspected.
    pub fn contains(&self, value: &T) -> bool {
        self.position(value).is_some()
    }

    /// Removes the first queued element equal to `value`, preserving the
    /// relative order of the rest. Returns whether a match was removed.
    ///
    /// # Example
    ///
    /// ```
    /// use ringkit::ds::RingBufferQueue;
    ///
    /// let mut queue = RingBufferQueue::with_base_capacity(4);
    /// queue.extend([1, 2, 3, 4]);
    /// queue.dequeue().unwrap();
    /// queue.enqueue(5); // window now wraps
    ///
    /// assert!(queue.remove(&3));
    /// assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![2, 4, 5]);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        let Some(offset) = self.position(value) else {
            return false;
        };
        debug_assert!(offset < self.len, "match offset {offset} outside live window");

        if self.head + self.len > self.slots.len() {
            tracing::debug!(head = self.head, len = self.len, "linearizing wrapped queue for removal");
        }
        self.linearize();

        let index = offset;
        self.slots[index] = None;
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        self.tail = self.len % self.slots.len();
        true
    }

    fn position(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }
}

impl<T: Clone> RingBufferQueue<T> {
    /// Clones the queued elements, oldest first, into `dest[offset..offset + len]`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Argument`] when `dest` cannot hold `len` elements
    /// starting at `offset`. Nothing is written in that case.
    pub fn copy_to(&self, dest: &mut [T], offset: usize) -> Result<(), CollectionError> {
        check_destination(dest.len(), offset, self.len)?;
        for (slot, value) in dest[offset..].iter_mut().zip(self.iter()) {
            slot.clone_from(value);
        }
        Ok(())
    }
}

fn empty_slots<T>(capacity: usize) -> Vec<Option<T>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots
}

impl<T> Default for RingBufferQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for RingBufferQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for RingBufferQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

// ---------------------------------------------------------------------------
// Iterator types
// ---------------------------------------------------------------------------

/// Borrowed iterator over a [`RingBufferQueue`] from oldest to newest.
///
/// Created by [`RingBufferQueue::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    queue: &'a RingBufferQueue<T>,
    pos: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.queue.len {
            return None;
        }
        let slot = self.queue.physical(self.pos);
        self.pos += 1;
        self.queue.slots[slot].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len.saturating_sub(self.pos);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator that drains a [`RingBufferQueue`] in FIFO order.
#[derive(Debug)]
pub struct IntoIter<T> {
    queue: RingBufferQueue<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.try_dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len, Some(self.queue.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for RingBufferQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

impl<'a, T> IntoIterator for &'a RingBufferQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
