//! Circular doubly linked list backed by a generational `SlotArena`.
//!
//! Nodes live in a [`SlotArena`] and link to each other by [`SlotId`], so the
//! ring has no null ends: every attached node has a `next` and a `prev`, and
//! following `next` `len` times from any node returns to it. `head` marks the
//! node iteration starts from; the last node is always `head.prev`.
//!
//! ## Architecture
//!
//! ```text
//!   arena (SlotArena<Node<T>>)
//!   ┌────────┬──────────────────────────────────────────────┐
//!   │ SlotId │ Node { value, owner, prev, next }            │
//!   ├────────┼──────────────────────────────────────────────┤
//!   │ id_1   │ { A, owner: list, prev: id_3, next: id_2 }   │
//!   │ id_2   │ { B, owner: list, prev: id_1, next: id_3 }   │
//!   │ id_3   │ { C, owner: list, prev: id_2, next: id_1 }   │
//!   └────────┴──────────────────────────────────────────────┘
//!
//!        head
//!         │
//!         ▼
//!   ┌──► [id_1] ◄──► [id_2] ◄──► [id_3] ◄──┐
//!   └──────────────────────────────────────┘
//! ```
//!
//! ## Handles and Ownership
//!
//! Inserts return a [`NodeRef`] naming the owning list and the node's slot.
//! Every node records its owner as a plain [`ListId`]; the id is compared,
//! never dereferenced, so a list and its nodes hold no references to each
//! other. Handles are validated on use:
//!
//! - a handle from another list fails with `InvalidOperation`;
//! - a handle whose node was removed fails with `InvalidOperation`, even if
//!   the slot has since been reused;
//! - a [`Node`] whose owner is already set cannot be inserted anywhere.
//!
//! ## Insertion Conventions
//!
//! | Operation             | Splice point           | `head` afterwards   |
//! |-----------------------|------------------------|---------------------|
//! | `add_first`           | before `head`          | the new node        |
//! | `add_last`            | before `head`          | unchanged           |
//! | `add_before(at, _)`   | before `at`            | new node if `at` was head |
//! | `add_after(at, _)`    | before `at.next`       | unchanged           |
//!
//! On an empty list every insert creates a one-node ring that is its own
//! `next` and `prev`, and becomes `head`.
//!
//! ## Performance
//! - `add_*`: O(1)
//! - `remove_node`: O(1)
//! - `find` / `remove` / `contains`: O(n)
//! - `iter`: O(n), exactly `len` steps
//!
//! `check_invariants()` walks the ring in both directions.

use std::sync::atomic::{AtomicU64, Ordering};

use rustc_hash::FxHashSet;

use crate::ds::dynamic_array::check_destination;
use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::error::{CollectionError, InvariantError};

const NODE_ALREADY_ATTACHED: &str = "node already attached";
const NODE_NOT_IN_LIST: &str = "node does not belong to this list";
const NODE_DETACHED: &str = "node is no longer attached";

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a [`CircularLinkedList`], recorded on each node it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListId(u64);

impl ListId {
    fn next() -> Self {
        Self(NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle to a node attached to a specific list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    list: ListId,
    slot: SlotId,
}

impl NodeRef {
    /// Returns the id of the list the node was attached to.
    pub fn list(&self) -> ListId {
        self.list
    }
}

/// A list node.
///
/// Free-standing nodes are built with [`Node::new`] and can be attached to
/// any one list. [`CircularLinkedList::remove_node`] hands a node back in
/// this detached state so it can be reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    owner: Option<ListId>,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

impl<T> Node<T> {
    /// Creates a detached node.
    pub fn new(value: T) -> Self {
        Self {
            value,
            owner: None,
            prev: None,
            next: None,
        }
    }

    /// Creates a node bound to `owner` but not linked into it.
    ///
    /// Such a node is considered attached and is rejected by the
    /// `add_*_node` methods of every list.
    pub fn with_owner(owner: ListId, value: T) -> Self {
        Self {
            owner: Some(owner),
            ..Self::new(value)
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns the list this node belongs to, if any.
    pub fn owner(&self) -> Option<ListId> {
        self.owner
    }

    pub fn is_attached(&self) -> bool {
        self.owner.is_some()
    }

    fn detach(&mut self) {
        self.owner = None;
        self.prev = None;
        self.next = None;
    }
}

/// Circular doubly linked list with externally visible node handles.
#[derive(Debug)]
pub struct CircularLinkedList<T> {
    id: ListId,
    arena: SlotArena<Node<T>>,
    head: Option<SlotId>,
}

impl<T> CircularLinkedList<T> {
    /// Creates an empty list with a fresh [`ListId`].
    pub fn new() -> Self {
        Self {
            id: ListId::next(),
            arena: SlotArena::new(),
            head: None,
        }
    }

    /// Creates an empty list with reserved node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: ListId::next(),
            arena: SlotArena::with_capacity(capacity),
            head: None,
        }
    }

    /// Returns this list's identity.
    pub fn id(&self) -> ListId {
        self.id
    }

    /// Returns the number of nodes in the ring.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns the handle of the head node.
    pub fn first(&self) -> Option<NodeRef> {
        self.head.map(|slot| self.handle(slot))
    }

    /// Returns the handle of the node before head.
    pub fn last(&self) -> Option<NodeRef> {
        let head = self.head?;
        let prev = self.arena.get(head)?.prev?;
        Some(self.handle(prev))
    }

    /// Returns the head value.
    pub fn front(&self) -> Option<&T> {
        self.head
            .and_then(|slot| self.arena.get(slot).map(|node| &node.value))
    }

    /// Returns the value of the node before head.
    pub fn back(&self) -> Option<&T> {
        self.last().and_then(|node| self.get(node))
    }

    /// Returns `true` if `node` is currently attached to this list.
    pub fn contains_node(&self, node: NodeRef) -> bool {
        node.list == self.id && self.arena.contains(node.slot)
    }

    /// Returns the value of an attached node.
    pub fn get(&self, node: NodeRef) -> Option<&T> {
        self.node(node).map(|node| &node.value)
    }

    /// Returns a mutable reference to the value of an attached node.
    pub fn get_mut(&mut self, node: NodeRef) -> Option<&mut T> {
        if node.list != self.id {
            return None;
        }
        self.arena.get_mut(node.slot).map(|node| &mut node.value)
    }

    /// Returns the node behind a handle.
    pub fn node(&self, node: NodeRef) -> Option<&Node<T>> {
        if node.list != self.id {
            return None;
        }
        self.arena.get(node.slot)
    }

    /// Returns the handle following `node` in the ring.
    pub fn next(&self, node: NodeRef) -> Option<NodeRef> {
        let next = self.node(node)?.next?;
        Some(self.handle(next))
    }

    /// Returns the handle preceding `node` in the ring.
    pub fn previous(&self, node: NodeRef) -> Option<NodeRef> {
        let prev = self.node(node)?.prev?;
        Some(self.handle(prev))
    }

    /// Inserts `value` as the new head.
    pub fn add_first(&mut self, value: T) -> NodeRef {
        self.link_first(Node::new(value))
    }

    /// Inserts a detached node as the new head.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidOperation`] if `node` already has an owner.
    pub fn add_first_node(&mut self, node: Node<T>) -> Result<NodeRef, CollectionError> {
        validate_new_node(&node)?;
        Ok(self.link_first(node))
    }

    /// Inserts `value` just before head, leaving head unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use ringkit::ds::CircularLinkedList;
    ///
    /// let mut list = CircularLinkedList::new();
    /// let ten = list.add_last(10);
    /// list.add_last(20);
    /// assert_eq!(list.first(), Some(ten));
    /// assert_eq!(list.back(), Some(&20));
    /// ```
    pub fn add_last(&mut self, value: T) -> NodeRef {
        self.link_last(Node::new(value))
    }

    /// Inserts a detached node just before head, leaving head unchanged.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidOperation`] if `node` already has an owner.
    pub fn add_last_node(&mut self, node: Node<T>) -> Result<NodeRef, CollectionError> {
        validate_new_node(&node)?;
        Ok(self.link_last(node))
    }

    /// Inserts `value` immediately before `at`. Inserting before head makes
    /// the new node head.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidOperation`] if `at` is not attached to this list.
    ///
    /// # Example
    ///
    /// ```
    /// use ringkit::ds::CircularLinkedList;
    ///
    /// let mut list = CircularLinkedList::new();
    /// list.add_last(10);
    /// let first = list.first().unwrap();
    /// list.add_before(first, 1).unwrap();
    ///
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 10]);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.back(), Some(&10));
    /// ```
    pub fn add_before(&mut self, at: NodeRef, value: T) -> Result<NodeRef, CollectionError> {
        let at = self.validate_node(at)?;
        Ok(self.splice_before_at(at, Node::new(value)))
    }

    /// Inserts a detached node immediately before `at`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidOperation`] if `at` is not attached to this
    /// list or `node` already has an owner.
    pub fn add_before_node(
        &mut self,
        at: NodeRef,
        node: Node<T>,
    ) -> Result<NodeRef, CollectionError> {
        let at = self.validate_node(at)?;
        validate_new_node(&node)?;
        Ok(self.splice_before_at(at, node))
    }

    /// Inserts `value` immediately after `at`. Head is unchanged.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidOperation`] if `at` is not attached to this list.
    pub fn add_after(&mut self, at: NodeRef, value: T) -> Result<NodeRef, CollectionError> {
        let at = self.validate_node(at)?;
        Ok(self.splice_after(at, Node::new(value)))
    }

    /// Inserts a detached node immediately after `at`. Head is unchanged.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidOperation`] if `at` is not attached to this
    /// list or `node` already has an owner.
    pub fn add_after_node(
        &mut self,
        at: NodeRef,
        node: Node<T>,
    ) -> Result<NodeRef, CollectionError> {
        let at = self.validate_node(at)?;
        validate_new_node(&node)?;
        Ok(self.splice_after(at, node))
    }

    /// Unlinks `node` and returns it detached (no owner, no links).
    ///
    /// Removing head advances head to the removed node's `next`; removing the
    /// only node empties the list.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidOperation`] if `node` is not attached to this list.
    pub fn remove_node(&mut self, node: NodeRef) -> Result<Node<T>, CollectionError> {
        let slot = self.validate_node(node)?;
        self.unlink(slot)
            .ok_or(CollectionError::InvalidOperation(NODE_DETACHED))
    }

    /// Drops every node and resets head.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
    }

    /// Returns an iterator over values starting at head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
            remaining: self.len(),
        }
    }

    /// Returns an iterator over node handles starting at head.
    pub fn iter_nodes(&self) -> NodeIter<'_, T> {
        NodeIter {
            list: self,
            current: self.head,
            remaining: self.len(),
        }
    }

    /// Returns an approximate memory footprint in bytes.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.arena.approx_bytes()
    }

    /// Verifies ring closure, link symmetry and node ownership.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let len = self.len();
        let Some(head) = self.head else {
            return if len == 0 {
                Ok(())
            } else {
                Err(InvariantError::new(format!("no head but len is {len}")))
            };
        };

        let mut seen = FxHashSet::default();
        let mut current = head;
        for step in 0..len {
            let node = self
                .arena
                .get(current)
                .ok_or_else(|| InvariantError::new(format!("step {step}: dangling link")))?;
            if node.owner != Some(self.id) {
                return Err(InvariantError::new(format!("step {step}: foreign owner")));
            }
            if !seen.insert(current) {
                return Err(InvariantError::new(format!(
                    "step {step}: ring closes early"
                )));
            }
            let next = node
                .next
                .ok_or_else(|| InvariantError::new(format!("step {step}: missing next")))?;
            let back = self.arena.get(next).and_then(|n| n.prev);
            if back != Some(current) {
                return Err(InvariantError::new(format!(
                    "step {step}: next.prev does not point back"
                )));
            }
            current = next;
        }
        if current != head {
            return Err(InvariantError::new(format!(
                "ring does not close after {len} steps"
            )));
        }
        Ok(())
    }

    fn handle(&self, slot: SlotId) -> NodeRef {
        NodeRef {
            list: self.id,
            slot,
        }
    }

    fn validate_node(&self, node: NodeRef) -> Result<SlotId, CollectionError> {
        if node.list != self.id {
            return Err(CollectionError::InvalidOperation(NODE_NOT_IN_LIST));
        }
        if !self.arena.contains(node.slot) {
            return Err(CollectionError::InvalidOperation(NODE_DETACHED));
        }
        Ok(node.slot)
    }

    fn link_first(&mut self, node: Node<T>) -> NodeRef {
        match self.head {
            None => self.link_sole(node),
            Some(head) => {
                let handle = self.splice_before(head, node);
                self.head = Some(handle.slot);
                handle
            }
        }
    }

    fn link_last(&mut self, node: Node<T>) -> NodeRef {
        match self.head {
            None => self.link_sole(node),
            Some(head) => self.splice_before(head, node),
        }
    }

    fn splice_before_at(&mut self, at: SlotId, node: Node<T>) -> NodeRef {
        let handle = self.splice_before(at, node);
        if self.head == Some(at) {
            self.head = Some(handle.slot);
        }
        handle
    }

    fn splice_after(&mut self, at: SlotId, node: Node<T>) -> NodeRef {
        let next = self
            .arena
            .get(at)
            .and_then(|node| node.next)
            .unwrap_or(at);
        self.splice_before(next, node)
    }

    /// Installs `node` as a one-element ring and makes it head.
    fn link_sole(&mut self, mut node: Node<T>) -> NodeRef {
        node.owner = Some(self.id);
        let slot = self.arena.insert(node);
        if let Some(node) = self.arena.get_mut(slot) {
            node.prev = Some(slot);
            node.next = Some(slot);
        }
        self.head = Some(slot);
        self.handle(slot)
    }

    /// Links `node` between `at.prev` and `at`. Does not touch head.
    fn splice_before(&mut self, at: SlotId, mut node: Node<T>) -> NodeRef {
        let prev = self
            .arena
            .get(at)
            .and_then(|node| node.prev)
            .unwrap_or(at);
        node.owner = Some(self.id);
        node.prev = Some(prev);
        node.next = Some(at);
        let slot = self.arena.insert(node);

        if let Some(prev_node) = self.arena.get_mut(prev) {
            prev_node.next = Some(slot);
        }
        if let Some(at_node) = self.arena.get_mut(at) {
            at_node.prev = Some(slot);
        }
        self.handle(slot)
    }

    fn unlink(&mut self, slot: SlotId) -> Option<Node<T>> {
        let (prev, next) = {
            let node = self.arena.get(slot)?;
            (node.prev, node.next)
        };

        if next == Some(slot) {
            self.head = None;
        } else {
            if let Some(prev_id) = prev {
                if let Some(prev_node) = self.arena.get_mut(prev_id) {
                    prev_node.next = next;
                }
            }
            if let Some(next_id) = next {
                if let Some(next_node) = self.arena.get_mut(next_id) {
                    next_node.prev = prev;
                }
            }
            if self.head == Some(slot) {
                self.head = next;
            }
        }

        let mut node = self.arena.remove(slot)?;
        node.detach();
        Some(node)
    }
}

impl<T: PartialEq> CircularLinkedList<T> {
    /// Returns the first node, walking from head, whose value equals `value`.
    ///
    /// On a `CircularLinkedList<Option<U>>`, `find(&None)` locates the first
    /// absent-valued node.
    pub fn find(&self, value: &T) -> Option<NodeRef> {
        self.iter_nodes()
            .find(|node| self.get(*node).is_some_and(|v| v == value))
    }

    /// Returns `true` if some node holds `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Removes the first node holding `value`; returns whether one was found.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.find(value) {
            Some(node) => self.remove_node(node).is_ok(),
            None => false,
        }
    }
}

impl<T: Clone> CircularLinkedList<T> {
    /// Clones values in ring order into `dest[offset..offset + len]`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Argument`] when `dest` cannot hold `len` values
    /// starting at `offset`.
    pub fn copy_to(&self, dest: &mut [T], offset: usize) -> Result<(), CollectionError> {
        check_destination(dest.len(), offset, self.len())?;
        for (slot, value) in dest[offset..].iter_mut().zip(self.iter()) {
            slot.clone_from(value);
        }
        Ok(())
    }
}

fn validate_new_node<T>(node: &Node<T>) -> Result<(), CollectionError> {
    if node.is_attached() {
        return Err(CollectionError::InvalidOperation(NODE_ALREADY_ATTACHED));
    }
    Ok(())
}

impl<T> Default for CircularLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for CircularLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_last(value);
        }
    }
}

impl<T> FromIterator<T> for CircularLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Iterator over values from head, visiting exactly `len` nodes.
pub struct Iter<'a, T> {
    list: &'a CircularLinkedList<T>,
    current: Option<SlotId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.arena.get(self.current?)?;
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Iterator over node handles from head.
pub struct NodeIter<'a, T> {
    list: &'a CircularLinkedList<T>,
    current: Option<SlotId>,
    remaining: usize,
}

impl<T> Iterator for NodeIter<'_, T> {
    type Item = NodeRef;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.current?;
        let node = self.list.arena.get(slot)?;
        self.current = node.next;
        self.remaining -= 1;
        Some(self.list.handle(slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> IntoIterator for &'a CircularLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<T: Copy>(list: &CircularLinkedList<T>) -> Vec<T> {
        list.iter().copied().collect()
    }

    #[test]
    fn empty_list_has_no_ends() {
        let list: CircularLinkedList<i32> = CircularLinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
        assert_eq!(list.iter().count(), 0);
        list.check_invariants().unwrap();
    }

    #[test]
    fn add_last_iterates_in_insertion_order() {
        let list: CircularLinkedList<_> = (0..5).collect();
        assert_eq!(values(&list), vec![0, 1, 2, 3, 4]);
        assert_eq!(list.front(), Some(&0));
        assert_eq!(list.back(), Some(&4));
        list.check_invariants().unwrap();
    }

    #[test]
    fn single_node_ring_links_to_itself() {
        let mut list = CircularLinkedList::new();
        let only = list.add_first(7);
        assert_eq!(list.next(only), Some(only));
        assert_eq!(list.previous(only), Some(only));
        assert_eq!(list.first(), Some(only));
        assert_eq!(list.last(), Some(only));
    }

    #[test]
    fn add_first_moves_head_to_new_node() {
        let mut list = CircularLinkedList::new();
        list.add_first(3);
        list.add_first(2);
        let one = list.add_first(1);
        assert_eq!(list.first(), Some(one));
        assert_eq!(values(&list), vec![1, 2, 3]);
        assert_eq!(list.back(), Some(&3));
    }

    #[test]
    fn add_last_leaves_head_unchanged() {
        let mut list = CircularLinkedList::new();
        let head = list.add_last("a");
        list.add_last("b");
        let c = list.add_last("c");
        assert_eq!(list.first(), Some(head));
        assert_eq!(list.last(), Some(c));
        assert_eq!(list.previous(head), Some(c));
        assert_eq!(list.next(c), Some(head));
    }

    #[test]
    fn add_before_head_makes_new_head() {
        let mut list = CircularLinkedList::new();
        list.add_last(10);
        let first = list.first().unwrap();
        let one = list.add_before(first, 1).unwrap();

        assert_eq!(values(&list), vec![1, 10]);
        assert_eq!(list.first(), Some(one));
        assert_eq!(list.get(list.first().unwrap()), Some(&1));
        assert_eq!(list.get(list.last().unwrap()), Some(&10));
        list.check_invariants().unwrap();
    }

    #[test]
    fn add_before_middle_keeps_head() {
        let mut list: CircularLinkedList<_> = [1, 2, 4].into_iter().collect();
        let four = list.find(&4).unwrap();
        list.add_before(four, 3).unwrap();
        assert_eq!(values(&list), vec![1, 2, 3, 4]);
        assert_eq!(list.front(), Some(&1));
    }

    #[test]
    fn add_after_splices_after_reference() {
        let mut list: CircularLinkedList<_> = [1, 3].into_iter().collect();
        let one = list.find(&1).unwrap();
        list.add_after(one, 2).unwrap();
        let three = list.find(&3).unwrap();
        list.add_after(three, 4).unwrap();
        assert_eq!(values(&list), vec![1, 2, 3, 4]);
        assert_eq!(list.front(), Some(&1));
        list.check_invariants().unwrap();
    }

    #[test]
    fn add_after_on_single_node() {
        let mut list = CircularLinkedList::new();
        let a = list.add_last('a');
        list.add_after(a, 'b').unwrap();
        assert_eq!(values(&list), vec!['a', 'b']);
        assert_eq!(list.first(), Some(a));
    }

    #[test]
    fn node_variants_attach_detached_nodes() {
        let mut list = CircularLinkedList::new();
        let b = list.add_first_node(Node::new('b')).unwrap();
        list.add_last_node(Node::new('d')).unwrap();
        list.add_before_node(b, Node::new('a')).unwrap();
        list.add_after_node(b, Node::new('c')).unwrap();
        assert_eq!(values(&list), vec!['a', 'b', 'c', 'd']);

        let attached = list.node(b).unwrap();
        assert_eq!(attached.owner(), Some(list.id()));
        assert_eq!(attached.value(), &'b');
        list.check_invariants().unwrap();
    }

    #[test]
    fn attaching_owned_node_fails() {
        let mut list = CircularLinkedList::new();
        let other: CircularLinkedList<i32> = CircularLinkedList::new();
        let anchor = list.add_last(1);

        let bound = Node::with_owner(other.id(), 5);
        assert_eq!(
            list.add_last_node(bound.clone()),
            Err(CollectionError::InvalidOperation("node already attached"))
        );
        assert!(list.add_first_node(bound.clone()).is_err());
        assert!(list.add_before_node(anchor, bound.clone()).is_err());
        assert!(list.add_after_node(anchor, bound).is_err());

        let own = Node::with_owner(list.id(), 6);
        assert!(list.add_last_node(own).is_err());
        assert_eq!(values(&list), vec![1]);
    }

    #[test]
    fn foreign_reference_node_fails() {
        let mut a = CircularLinkedList::new();
        let mut b = CircularLinkedList::new();
        a.add_last(1);
        let foreign = b.add_last(2);

        assert_eq!(
            a.add_before(foreign, 0),
            Err(CollectionError::InvalidOperation(
                "node does not belong to this list"
            ))
        );
        assert!(a.add_after(foreign, 0).is_err());
        assert!(a.remove_node(foreign).is_err());
        assert_eq!(a.get(foreign), None);
        assert_eq!(values(&a), vec![1]);
    }

    #[test]
    fn stale_handle_is_rejected() {
        let mut list = CircularLinkedList::new();
        let a = list.add_last(1);
        list.remove_node(a).unwrap();
        let reused = list.add_last(2);

        assert!(!list.contains_node(a));
        assert!(list.contains_node(reused));
        assert_eq!(
            list.add_after(a, 3),
            Err(CollectionError::InvalidOperation("node is no longer attached"))
        );
        assert_eq!(list.get(a), None);
    }

    #[test]
    fn find_walks_from_head() {
        let mut list: CircularLinkedList<_> = [5, 6, 5].into_iter().collect();
        let first_five = list.first().unwrap();
        assert_eq!(list.find(&5), Some(first_five));
        assert_eq!(list.find(&9), None);

        list.remove(&5);
        let remaining_five = list.find(&5).unwrap();
        assert_eq!(list.previous(remaining_five), list.first());
    }

    #[test]
    fn find_absent_marker() {
        let list: CircularLinkedList<Option<&str>> =
            [Some("a"), None, Some("b")].into_iter().collect();
        let none = list.find(&None).unwrap();
        assert_eq!(list.get(none), Some(&None));
        assert_eq!(list.previous(none), list.first());
    }

    #[test]
    fn remove_only_element_empties_list() {
        let mut list = CircularLinkedList::new();
        list.add_last(42);
        assert!(list.remove(&42));
        assert_eq!(list.len(), 0);
        assert_eq!(list.first(), None);
        assert_eq!(list.find(&42), None);
        list.check_invariants().unwrap();
    }

    #[test]
    fn remove_head_advances_to_next() {
        let mut list: CircularLinkedList<_> = [1, 2, 3].into_iter().collect();
        assert!(list.remove(&1));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.back(), Some(&3));
        assert_eq!(values(&list), vec![2, 3]);
        assert!(!list.remove(&1));
        list.check_invariants().unwrap();
    }

    #[test]
    fn removed_node_is_detached_and_reusable() {
        let mut a = CircularLinkedList::new();
        let mut b = CircularLinkedList::new();
        let x = a.add_last("x");
        a.add_last("y");

        let node = a.remove_node(x).unwrap();
        assert_eq!(node.owner(), None);
        assert!(!node.is_attached());

        b.add_first(".");
        let moved = b.add_last_node(node).unwrap();
        assert_eq!(b.get(moved), Some(&"x"));
        assert_eq!(values(&a), vec!["y"]);
        assert_eq!(values(&b), vec![".", "x"]);
        a.check_invariants().unwrap();
        b.check_invariants().unwrap();
    }

    #[test]
    fn clear_invalidates_handles() {
        let mut list: CircularLinkedList<_> = (0..3).collect();
        let head = list.first().unwrap();
        list.clear();
        assert!(list.is_empty());
        assert!(list.add_after(head, 9).is_err());
        list.add_last(1);
        assert_eq!(values(&list), vec![1]);
    }

    #[test]
    fn contains_and_get_mut() {
        let mut list: CircularLinkedList<_> = [1, 2].into_iter().collect();
        assert!(list.contains(&2));
        let two = list.find(&2).unwrap();
        if let Some(v) = list.get_mut(two) {
            *v = 20;
        }
        assert!(!list.contains(&2));
        assert!(list.contains(&20));
    }

    #[test]
    fn copy_to_in_ring_order() {
        let mut list = CircularLinkedList::new();
        list.add_last(2);
        list.add_first(1);
        list.add_last(3);
        let mut dest = [0; 4];
        list.copy_to(&mut dest, 1).unwrap();
        assert_eq!(dest, [0, 1, 2, 3]);
        assert!(list.copy_to(&mut dest, 2).is_err());
    }

    #[test]
    fn iteration_visits_exactly_len_nodes() {
        let list: CircularLinkedList<_> = (0..4).collect();
        assert_eq!(list.iter().len(), 4);
        assert_eq!(list.iter_nodes().count(), 4);
        let twice: Vec<_> = list.iter().chain(list.iter()).copied().collect();
        assert_eq!(twice, vec![0, 1, 2, 3, 0, 1, 2, 3]);
    }

    #[test]
    fn node_value_accessors() {
        let mut node = Node::new(String::from("a"));
        node.value_mut().push('b');
        assert_eq!(node.value(), "ab");
        assert_eq!(node.into_value(), "ab");
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    #[derive(Debug, Clone)]
    enum Op {
        AddFirst(u8),
        AddLast(u8),
        AddBefore(prop::sample::Index, u8),
        AddAfter(prop::sample::Index, u8),
        Remove(u8),
        RemoveNode(prop::sample::Index),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<u8>().prop_map(Op::AddFirst),
            any::<u8>().prop_map(Op::AddLast),
            (any::<prop::sample::Index>(), any::<u8>()).prop_map(|(i, v)| Op::AddBefore(i, v)),
            (any::<prop::sample::Index>(), any::<u8>()).prop_map(|(i, v)| Op::AddAfter(i, v)),
            (0u8..8).prop_map(Op::Remove),
            any::<prop::sample::Index>().prop_map(Op::RemoveNode),
        ]
    }

    proptest! {
        /// Property: add_last sequence iterates back in order
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_add_last_order(values in prop::collection::vec(any::<i32>(), 0..100)) {
            let list: CircularLinkedList<_> = values.iter().copied().collect();
            prop_assert_eq!(list.len(), values.len());
            prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), values);
        }

        /// Property: matches a VecDeque model where index 0 is head
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_matches_deque_reference(ops in prop::collection::vec(op_strategy(), 0..120)) {
            let mut list = CircularLinkedList::new();
            let mut reference: VecDeque<u8> = VecDeque::new();

            for op in ops {
                let nodes: Vec<_> = list.iter_nodes().collect();
                match op {
                    Op::AddFirst(v) => {
                        list.add_first(v);
                        reference.push_front(v);
                    }
                    Op::AddLast(v) => {
                        list.add_last(v);
                        reference.push_back(v);
                    }
                    Op::AddBefore(idx, v) => {
                        if nodes.is_empty() {
                            continue;
                        }
                        let i = idx.index(nodes.len());
                        list.add_before(nodes[i], v).unwrap();
                        reference.insert(i, v);
                    }
                    Op::AddAfter(idx, v) => {
                        if nodes.is_empty() {
                            continue;
                        }
                        let i = idx.index(nodes.len());
                        list.add_after(nodes[i], v).unwrap();
                        reference.insert(i + 1, v);
                    }
                    Op::Remove(v) => {
                        let pos = reference.iter().position(|x| *x == v);
                        if let Some(pos) = pos {
                            reference.remove(pos);
                        }
                        prop_assert_eq!(list.remove(&v), pos.is_some());
                    }
                    Op::RemoveNode(idx) => {
                        if nodes.is_empty() {
                            continue;
                        }
                        let i = idx.index(nodes.len());
                        let node = list.remove_node(nodes[i]).unwrap();
                        prop_assert_eq!(Some(node.into_value()), reference.remove(i));
                    }
                }
                prop_assert!(list.check_invariants().is_ok());
                prop_assert!(list.iter().eq(reference.iter()));
                prop_assert_eq!(list.back(), reference.back());
            }
        }
    }
}
