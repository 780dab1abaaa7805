#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::fuzz_target;
use ringkit::ds::{CircularLinkedList, Node};

// Fuzz arbitrary operation sequences on CircularLinkedList
//
// Tests random sequences of add_first, add_last, add_before, add_after,
// remove_node, remove by value, reattaching detached nodes and clear. Old
// handles are kept around and reused so stale and foreign handles are
// exercised too.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut list: CircularLinkedList<u8> = CircularLinkedList::new();
    let mut other: CircularLinkedList<u8> = CircularLinkedList::new();
    let foreign = other.add_last(0);
    let mut model: VecDeque<u8> = VecDeque::new();
    let mut stale = Vec::new();
    let mut detached: Vec<Node<u8>> = Vec::new();

    let mut idx = 0;
    while idx + 1 < data.len() {
        let op = data[idx] % 9;
        let value = data[idx + 1];
        let handles: Vec<_> = list.iter_nodes().collect();
        let pick = usize::from(value) % handles.len().max(1);

        match op {
            0 => {
                list.add_first(value);
                model.push_front(value);
                assert_eq!(list.front(), Some(&value));
            }
            1 => {
                list.add_last(value);
                model.push_back(value);
                assert_eq!(list.back(), Some(&value));
            }
            2 => {
                // add_before
                if let Some(at) = handles.get(pick) {
                    list.add_before(*at, value).unwrap();
                    model.insert(pick, value);
                }
            }
            3 => {
                // add_after
                if let Some(at) = handles.get(pick) {
                    list.add_after(*at, value).unwrap();
                    model.insert(pick + 1, value);
                }
            }
            4 => {
                // remove_node
                if let Some(at) = handles.get(pick) {
                    let node = list.remove_node(*at).unwrap();
                    assert!(!node.is_attached());
                    assert_eq!(Some(*node.value()), model.remove(pick));
                    stale.push(*at);
                    detached.push(node);
                }
            }
            5 => {
                // remove by value
                let pos = model.iter().position(|v| *v == value);
                if let Some(pos) = pos {
                    model.remove(pos);
                }
                assert_eq!(list.remove(&value), pos.is_some());
            }
            6 => {
                // reattach a previously removed node at the tail
                if let Some(node) = detached.pop() {
                    let v = *node.value();
                    list.add_last_node(node).unwrap();
                    model.push_back(v);
                }
            }
            7 => {
                // stale and foreign handles must be rejected
                if let Some(old) = stale.get(pick % stale.len().max(1)) {
                    assert!(list.add_after(*old, value).is_err());
                    assert!(list.remove_node(*old).is_err());
                }
                assert!(list.add_before(foreign, value).is_err());
            }
            8 => {
                list.clear();
                stale.extend(handles);
                model.clear();
            }
            _ => unreachable!(),
        }

        assert_eq!(list.len(), model.len());
        assert!(list.iter().eq(model.iter()));
        assert!(list.check_invariants().is_ok());

        idx += 2;
    }
});
