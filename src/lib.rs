//! ringkit: generic growable containers and a lazy query layer.
//!
//! - [`ds::DynamicArray`]: contiguous array with doubling growth.
//! - [`ds::RingBufferQueue`]: FIFO queue over a wrapping buffer.
//! - [`ds::CircularLinkedList`]: circular doubly linked list with node handles.
//! - [`query`]: `filter_by` / `select` / `sort_query` over any iterator,
//!   backed by [`query::KeyedQuickSort`].
//!
//! ```
//! use ringkit::prelude::*;
//!
//! let mut queue = RingBufferQueue::new();
//! for c in ['a', 'b', 'c'] {
//!     queue.enqueue(c);
//! }
//! assert_eq!(queue.dequeue(), Ok('a'));
//! queue.enqueue('d');
//! assert_eq!(queue.iter().collect::<String>(), "bcd");
//! ```

pub mod builder;
pub mod ds;
pub mod error;
pub mod prelude;
pub mod query;
pub mod traits;

pub use crate::ds::{CircularLinkedList, DynamicArray, RingBufferQueue};
pub use crate::error::{CollectionError, InvariantError};
