#![no_main]

use std::collections::BinaryHeap;

use heapkit::ds::MaxHeap;
use libfuzzer_sys::fuzz_target;

// Fuzz stress test with reference validation
//
// Drives MaxHeap and std BinaryHeap with the same wide-value operations and
// requires identical observations.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut heap: MaxHeap<u32> = MaxHeap::new();
    let mut reference: BinaryHeap<u32> = BinaryHeap::new();

    for chunk in data.chunks(5) {
        if chunk.len() < 5 {
            break;
        }

        let value = u32::from_le_bytes([chunk[1], chunk[2], chunk[3], chunk[4]]);
        match chunk[0] % 4 {
            0 | 1 => {
                heap.push(value);
                reference.push(value);
            },
            2 => {
                assert_eq!(heap.pop().ok(), reference.pop());
            },
            3 => {
                assert_eq!(heap.push_pop(value), {
                    reference.push(value);
                    reference.pop().unwrap_or(value)
                });
            },
            _ => unreachable!(),
        }

        assert_eq!(heap.len(), reference.len());
        assert_eq!(heap.peek().ok(), reference.peek());
    }

    let drained = heap.into_sorted_vec();
    assert_eq!(drained, reference.into_sorted_vec().into_iter().rev().collect::<Vec<_>>());
});
