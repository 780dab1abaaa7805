pub mod circular_list;
pub mod dynamic_array;
pub mod ring_queue;
pub mod slot_arena;

pub use circular_list::{CircularLinkedList, ListId, Node, NodeRef};
pub use dynamic_array::{DEFAULT_ARRAY_CAPACITY, DynamicArray};
pub use ring_queue::{DEFAULT_QUEUE_CAPACITY, RingBufferQueue};
pub use slot_arena::{SlotArena, SlotId};
