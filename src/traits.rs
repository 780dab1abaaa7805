//! # Collection Trait
//!
//! The capability set shared by every container in [`crate::ds`], so that
//! callers can stay generic over the concrete layout.
//!
//! ## Architecture
//!
//! ```text
//!                 ┌──────────────────────────────────────────┐
//!                 │           SizedCollection<T>             │
//!                 │                                          │
//!                 │  len(&) → usize                          │
//!                 │  is_empty(&) → bool                      │
//!                 │  add(&mut, T)                            │
//!                 │  remove(&mut, &T) → bool                 │
//!                 │  contains(&, &T) → bool                  │
//!                 │  clear(&mut)                             │
//!                 │  iter(&) → Self::Iter<'_>                │
//!                 └────────────────────┬─────────────────────┘
//!                                      │
//!        ┌─────────────────────────────┼─────────────────────────────┐
//!        ▼                             ▼                             ▼
//!  DynamicArray<T>            RingBufferQueue<T>          CircularLinkedList<T>
//!  add = append at len        add = enqueue               add = add_last
//!  iter: index order          iter: head → tail           iter: ring from head
//! ```
//!
//! `remove` deletes the first element equal to the argument in iteration
//! order and reports whether one was found.
//!
//! ## Example Usage
//!
//! ```
//! use ringkit::ds::{CircularLinkedList, DynamicArray, RingBufferQueue};
//! use ringkit::traits::SizedCollection;
//!
//! fn fill<C: SizedCollection<u32>>(collection: &mut C) -> Vec<u32> {
//!     for i in 1..=4 {
//!         collection.add(i);
//!     }
//!     collection.remove(&2);
//!     collection.iter().copied().collect()
//! }
//!
//! assert_eq!(fill(&mut DynamicArray::new()), vec![1, 3, 4]);
//! assert_eq!(fill(&mut RingBufferQueue::new()), vec![1, 3, 4]);
//! assert_eq!(fill(&mut CircularLinkedList::new()), vec![1, 3, 4]);
//! ```

use crate::ds::{CircularLinkedList, DynamicArray, RingBufferQueue};

/// Operations every container supports.
pub trait SizedCollection<T> {
    /// Borrowing iterator in the container's natural order.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Returns the number of live elements.
    fn len(&self) -> usize;

    /// Returns `true` if the collection holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds an element at the container's natural insertion point.
    fn add(&mut self, value: T);

    /// Removes the first element equal to `value`.
    fn remove(&mut self, value: &T) -> bool;

    /// Returns `true` if an element equal to `value` is present.
    fn contains(&self, value: &T) -> bool;

    /// Removes every element.
    fn clear(&mut self);

    /// Returns an iterator over the live elements.
    fn iter(&self) -> Self::Iter<'_>;
}

impl<T: PartialEq> SizedCollection<T> for DynamicArray<T> {
    type Iter<'a>
        = crate::ds::dynamic_array::Iter<'a, T>
    where
        T: 'a;

    fn len(&self) -> usize {
        DynamicArray::len(self)
    }

    fn add(&mut self, value: T) {
        DynamicArray::add(self, value);
    }

    fn remove(&mut self, value: &T) -> bool {
        DynamicArray::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        DynamicArray::contains(self, value)
    }

    fn clear(&mut self) {
        DynamicArray::clear(self);
    }

    fn iter(&self) -> Self::Iter<'_> {
        DynamicArray::iter(self)
    }
}

impl<T: PartialEq> SizedCollection<T> for RingBufferQueue<T> {
    type Iter<'a>
        = crate::ds::ring_queue::Iter<'a, T>
    where
        T: 'a;

    fn len(&self) -> usize {
        RingBufferQueue::len(self)
    }

    fn add(&mut self, value: T) {
        self.enqueue(value);
    }

    fn remove(&mut self, value: &T) -> bool {
        RingBufferQueue::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        RingBufferQueue::contains(self, value)
    }

    fn clear(&mut self) {
        RingBufferQueue::clear(self);
    }

    fn iter(&self) -> Self::Iter<'_> {
        RingBufferQueue::iter(self)
    }
}

impl<T: PartialEq> SizedCollection<T> for CircularLinkedList<T> {
    type Iter<'a>
        = crate::ds::circular_list::Iter<'a, T>
    where
        T: 'a;

    fn len(&self) -> usize {
        CircularLinkedList::len(self)
    }

    fn add(&mut self, value: T) {
        self.add_last(value);
    }

    fn remove(&mut self, value: &T) -> bool {
        CircularLinkedList::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        CircularLinkedList::contains(self, value)
    }

    fn clear(&mut self) {
        CircularLinkedList::clear(self);
    }

    fn iter(&self) -> Self::Iter<'_> {
        CircularLinkedList::iter(self)
    }
}
