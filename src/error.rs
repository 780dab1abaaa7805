//! Error types for the ringkit library.
//!
//! ## Key Components
//!
//! - [`CollectionError`]: Returned by fallible container and query operations.
//!   Every check runs before any state change, so a failed call leaves the
//!   container exactly as it was.
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (`check_invariants` methods).
//!
//! ## Example Usage
//!
//! ```
//! use ringkit::ds::{DynamicArray, RingBufferQueue};
//! use ringkit::error::CollectionError;
//!
//! let mut queue: RingBufferQueue<u32> = RingBufferQueue::new();
//! assert_eq!(queue.dequeue(), Err(CollectionError::EmptyCollection));
//!
//! let mut array: DynamicArray<u32> = DynamicArray::new();
//! array.add(1);
//! let err = array.insert(2, 7).unwrap_err();
//! assert!(matches!(err, CollectionError::IndexOutOfRange { index: 2, len: 1 }));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// CollectionError
// ---------------------------------------------------------------------------

/// Error returned by container and query operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// An argument was invalid: a size whose capacity would overflow, a zero
    /// base capacity, or a destination buffer too small for the copy.
    #[error("invalid argument: {0}")]
    Argument(String),

    /// An index fell outside the valid window.
    ///
    /// For reads, writes and removals the window is `[0, len)`; for
    /// insertion it is `[0, len]`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A structural precondition was violated (reusing an attached node,
    /// passing a node owned by another list).
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),

    /// `dequeue`/`peek` on a queue with no elements.
    #[error("collection is empty")]
    EmptyCollection,
}

impl CollectionError {
    /// Creates a [`CollectionError::Argument`] with the given description.
    #[inline]
    pub fn argument(msg: impl Into<String>) -> Self {
        Self::Argument(msg.into())
    }

    #[inline]
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal container invariants are violated.
///
/// Produced by `check_invariants` methods on the container types
/// (e.g. [`RingBufferQueue::check_invariants`](crate::ds::RingBufferQueue::check_invariants)).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- CollectionError --------------------------------------------------

    #[test]
    fn index_out_of_range_display_names_index_and_len() {
        let err = CollectionError::out_of_range(5, 3);
        assert_eq!(err.to_string(), "index 5 out of range for length 3");
    }

    #[test]
    fn argument_display_shows_message() {
        let err = CollectionError::argument("destination too small");
        assert_eq!(err.to_string(), "invalid argument: destination too small");
    }

    #[test]
    fn invalid_operation_display_shows_reason() {
        let err = CollectionError::InvalidOperation("node already attached");
        assert_eq!(err.to_string(), "invalid operation: node already attached");
    }

    #[test]
    fn empty_collection_display() {
        assert_eq!(
            CollectionError::EmptyCollection.to_string(),
            "collection is empty"
        );
    }

    #[test]
    fn collection_error_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<CollectionError>();
    }

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("ring length mismatch");
        assert_eq!(err.to_string(), "ring length mismatch");
    }

    #[test]
    fn invariant_message_accessor() {
        let err = InvariantError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn invariant_clone_and_eq() {
        let a = InvariantError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn invariant_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<InvariantError>();
    }
}
