#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::fuzz_target;
use ringkit::ds::RingBufferQueue;

// Fuzz arbitrary operation sequences on RingBufferQueue
//
// Tests random sequences of enqueue, dequeue, peek, remove, contains and
// clear against a VecDeque, with extra dequeue/enqueue pairs to force the
// live window to wrap before removals.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let base = usize::from(data[0] % 6);
    let mut queue: RingBufferQueue<u8> = RingBufferQueue::with_base_capacity(base);
    let mut model: VecDeque<u8> = VecDeque::new();

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 7;
        let value = data[idx + 1];

        match op {
            0 | 1 => {
                // enqueue
                queue.enqueue(value);
                model.push_back(value);
            }
            2 => {
                // dequeue
                assert_eq!(queue.try_dequeue(), model.pop_front());
            }
            3 => {
                // peek (read-only)
                assert_eq!(queue.try_peek(), model.front());
            }
            4 => {
                // rotate: dequeue then enqueue, moving head forward
                if let Some(front) = model.pop_front() {
                    assert_eq!(queue.dequeue().ok(), Some(front));
                    queue.enqueue(front);
                    model.push_back(front);
                }
            }
            5 => {
                // remove by value
                let pos = model.iter().position(|v| *v == value);
                if let Some(pos) = pos {
                    model.remove(pos);
                }
                assert_eq!(queue.remove(&value), pos.is_some());
                assert_eq!(queue.contains(&value), model.contains(&value));
            }
            6 => {
                // clear
                queue.clear();
                model.clear();
                assert!(queue.try_peek().is_none());
            }
            _ => unreachable!(),
        }

        assert_eq!(queue.len(), model.len());
        assert!(queue.iter().eq(model.iter()));
        assert!(queue.check_invariants().is_ok());

        idx += 2;
    }
});
