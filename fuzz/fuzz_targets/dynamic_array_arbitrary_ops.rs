#![no_main]

use libfuzzer_sys::fuzz_target;
use ringkit::ds::DynamicArray;

// Fuzz arbitrary operation sequences on DynamicArray
//
// Mirrors every operation on a Vec and checks the two agree after each
// step: add, insert, remove_at, set, remove by value, clear.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let base = usize::from(data[0] % 8);
    let mut array: DynamicArray<u8> = DynamicArray::with_base_capacity(base);
    let mut model: Vec<u8> = Vec::new();

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 7;
        let value = data[idx + 1];
        let index = usize::from(value) % (model.len() + 2);

        match op {
            0 => {
                // add
                array.add(value);
                model.push(value);
            }
            1 => {
                // insert (may be one past the valid window)
                let result = array.insert(index, value);
                if index <= model.len() {
                    assert!(result.is_ok());
                    model.insert(index, value);
                } else {
                    assert!(result.is_err());
                }
            }
            2 => {
                // remove_at
                let result = array.remove_at(index);
                if index < model.len() {
                    assert_eq!(result.ok(), Some(model.remove(index)));
                } else {
                    assert!(result.is_err());
                }
            }
            3 => {
                // set
                let result = array.set(index, value);
                if index < model.len() {
                    let old = std::mem::replace(&mut model[index], value);
                    assert_eq!(result.ok(), Some(old));
                } else {
                    assert!(result.is_err());
                }
            }
            4 => {
                // remove by value
                let pos = model.iter().position(|v| *v == value);
                if let Some(pos) = pos {
                    model.remove(pos);
                }
                assert_eq!(array.remove(&value), pos.is_some());
            }
            5 => {
                // index_of (read-only)
                assert_eq!(array.index_of(&value), model.iter().position(|v| *v == value));
            }
            6 => {
                // clear
                array.clear();
                model.clear();
                assert_eq!(array.capacity(), array.base_capacity());
            }
            _ => unreachable!(),
        }

        assert_eq!(array.len(), model.len());
        assert!(array.capacity() >= array.len());
        assert!(array.iter().eq(model.iter()));
        assert!(array.check_invariants().is_ok());

        idx += 2;
    }
});
