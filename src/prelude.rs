pub use crate::builder::{Collection, CollectionBuilder, CollectionKind};
pub use crate::ds::{CircularLinkedList, DynamicArray, Node, NodeRef, RingBufferQueue};
pub use crate::error::CollectionError;
pub use crate::query::{CollectionQuery, KeyedQuickSort};
pub use crate::traits::SizedCollection;
