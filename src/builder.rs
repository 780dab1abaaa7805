//! Unified collection builder for all container kinds.
//!
//! Creates any of the three containers from a single base capacity and
//! wraps it in [`Collection`], which exposes the shared
//! [`SizedCollection`] operations regardless of the layout underneath.
//!
//! ## Example
//!
//! ```rust
//! use ringkit::builder::{CollectionBuilder, CollectionKind};
//! use ringkit::traits::SizedCollection;
//!
//! let mut collection = CollectionBuilder::new(16).build::<String>(CollectionKind::Queue);
//! collection.add("hello".to_string());
//! assert!(collection.contains(&"hello".to_string()));
//! assert_eq!(collection.kind(), CollectionKind::Queue);
//! ```

use crate::ds::{CircularLinkedList, DynamicArray, RingBufferQueue};
use crate::error::{CollectionError, InvariantError};
use crate::traits::SizedCollection;

/// Available container layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    /// Contiguous array with doubling growth.
    Array,
    /// FIFO ring buffer with doubling growth.
    Queue,
    /// Circular doubly linked list.
    List,
}

/// Unified wrapper that provides a consistent API regardless of layout.
#[derive(Debug)]
pub struct Collection<T> {
    inner: CollectionInner<T>,
}

#[derive(Debug)]
enum CollectionInner<T> {
    Array(DynamicArray<T>),
    Queue(RingBufferQueue<T>),
    List(CircularLinkedList<T>),
}

impl<T> Collection<T> {
    /// Returns the layout backing this collection.
    pub fn kind(&self) -> CollectionKind {
        match &self.inner {
            CollectionInner::Array(_) => CollectionKind::Array,
            CollectionInner::Queue(_) => CollectionKind::Queue,
            CollectionInner::List(_) => CollectionKind::List,
        }
    }

    /// Returns the backing array, if this is one.
    pub fn as_array(&self) -> Option<&DynamicArray<T>> {
        match &self.inner {
            CollectionInner::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Returns the backing queue, if this is one.
    pub fn as_queue(&self) -> Option<&RingBufferQueue<T>> {
        match &self.inner {
            CollectionInner::Queue(queue) => Some(queue),
            _ => None,
        }
    }

    /// Returns the backing list, if this is one.
    pub fn as_list(&self) -> Option<&CircularLinkedList<T>> {
        match &self.inner {
            CollectionInner::List(list) => Some(list),
            _ => None,
        }
    }

    /// Checks the invariants of the backing container.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        match &self.inner {
            CollectionInner::Array(array) => array.check_invariants(),
            CollectionInner::Queue(queue) => queue.check_invariants(),
            CollectionInner::List(list) => list.check_invariants(),
        }
    }
}

impl<T: PartialEq> SizedCollection<T> for Collection<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        T: 'a;

    fn len(&self) -> usize {
        match &self.inner {
            CollectionInner::Array(array) => array.len(),
            CollectionInner::Queue(queue) => queue.len(),
            CollectionInner::List(list) => list.len(),
        }
    }

    fn add(&mut self, value: T) {
        match &mut self.inner {
            CollectionInner::Array(array) => array.add(value),
            CollectionInner::Queue(queue) => queue.enqueue(value),
            CollectionInner::List(list) => {
                list.add_last(value);
            },
        }
    }

    fn remove(&mut self, value: &T) -> bool {
        match &mut self.inner {
            CollectionInner::Array(array) => array.remove(value),
            CollectionInner::Queue(queue) => queue.remove(value),
            CollectionInner::List(list) => list.remove(value),
        }
    }

    fn contains(&self, value: &T) -> bool {
        match &self.inner {
            CollectionInner::Array(array) => array.contains(value),
            CollectionInner::Queue(queue) => queue.contains(value),
            CollectionInner::List(list) => list.contains(value),
        }
    }

    fn clear(&mut self) {
        match &mut self.inner {
            CollectionInner::Array(array) => array.clear(),
            CollectionInner::Queue(queue) => queue.clear(),
            CollectionInner::List(list) => list.clear(),
        }
    }

    fn iter(&self) -> Self::Iter<'_> {
        let inner = match &self.inner {
            CollectionInner::Array(array) => IterInner::Array(array.iter()),
            CollectionInner::Queue(queue) => IterInner::Queue(queue.iter()),
            CollectionInner::List(list) => IterInner::List(list.iter()),
        };
        Iter { inner }
    }
}

/// Iterator over a [`Collection`].
pub struct Iter<'a, T> {
    inner: IterInner<'a, T>,
}

enum IterInner<'a, T> {
    Array(crate::ds::dynamic_array::Iter<'a, T>),
    Queue(crate::ds::ring_queue::Iter<'a, T>),
    List(crate::ds::circular_list::Iter<'a, T>),
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Array(iter) => iter.next(),
            IterInner::Queue(iter) => iter.next(),
            IterInner::List(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IterInner::Array(iter) => iter.size_hint(),
            IterInner::Queue(iter) => iter.size_hint(),
            IterInner::List(iter) => iter.size_hint(),
        }
    }
}

/// Builder for creating collection instances.
#[derive(Debug, Clone, Copy)]
pub struct CollectionBuilder {
    base_capacity: usize,
}

impl CollectionBuilder {
    /// Create a new builder whose containers start (and reset) at
    /// `base_capacity` slots. Lists preallocate node storage instead.
    pub fn new(base_capacity: usize) -> Self {
        Self { base_capacity }
    }

    /// Build a collection of the given kind.
    ///
    /// A zero base capacity is raised to one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ringkit::builder::{CollectionBuilder, CollectionKind};
    /// use ringkit::traits::SizedCollection;
    ///
    /// for kind in [CollectionKind::Array, CollectionKind::Queue, CollectionKind::List] {
    ///     let mut collection = CollectionBuilder::new(4).build::<u64>(kind);
    ///     collection.add(7);
    ///     assert_eq!(collection.len(), 1);
    /// }
    /// ```
    pub fn build<T>(self, kind: CollectionKind) -> Collection<T> {
        let inner = match kind {
            CollectionKind::Array => CollectionInner::Array(self.array()),
            CollectionKind::Queue => CollectionInner::Queue(self.queue()),
            CollectionKind::List => CollectionInner::List(self.list()),
        };
        Collection { inner }
    }

    /// Like [`build`](Self::build), but rejects a zero base capacity.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Argument`] if the base capacity is zero.
    pub fn try_build<T>(self, kind: CollectionKind) -> Result<Collection<T>, CollectionError> {
        if self.base_capacity == 0 {
            return Err(CollectionError::argument("base capacity must be non-zero"));
        }
        Ok(self.build(kind))
    }

    /// Build a [`DynamicArray`] with this base capacity.
    pub fn array<T>(self) -> DynamicArray<T> {
        DynamicArray::with_base_capacity(self.base_capacity)
    }

    /// Build a [`RingBufferQueue`] with this base capacity.
    pub fn queue<T>(self) -> RingBufferQueue<T> {
        RingBufferQueue::with_base_capacity(self.base_capacity)
    }

    /// Build a [`CircularLinkedList`] with node storage reserved for
    /// `base_capacity` nodes.
    pub fn list<T>(self) -> CircularLinkedList<T> {
        CircularLinkedList::with_capacity(self.base_capacity)
    }
}
