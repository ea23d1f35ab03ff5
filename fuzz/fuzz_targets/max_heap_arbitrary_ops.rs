#![no_main]

use heapkit::ds::MaxHeap;
use heapkit::error::EmptyHeapError;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on MaxHeap
//
// Tests random sequences of push, pop, peek, push_pop, replace_top, clear
// operations and checks heap order after every step.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut heap: MaxHeap<u8> = MaxHeap::new();

    for chunk in data.chunks(2) {
        if chunk.len() < 2 {
            break;
        }

        let op = chunk[0] % 7;
        let value = chunk[1];
        let old_len = heap.len();

        match op {
            0 | 1 => {
                // push (weighted so heaps actually grow)
                heap.push(value);
                assert_eq!(heap.len(), old_len + 1);
                assert!(heap.peek().is_ok_and(|&top| top >= value));
            },
            2 => {
                // pop
                let top = heap.peek().copied();
                let popped = heap.pop();
                assert_eq!(popped, top);
                if popped.is_ok() {
                    assert_eq!(heap.len(), old_len - 1);
                    if let (Ok(popped), Ok(&next)) = (popped, heap.peek()) {
                        assert!(next <= popped);
                    }
                } else {
                    assert_eq!(popped, Err(EmptyHeapError));
                    assert_eq!(old_len, 0);
                }
            },
            3 => {
                // peek (read-only)
                let first = heap.peek().copied();
                assert_eq!(heap.peek().copied(), first);
                assert_eq!(heap.len(), old_len);
            },
            4 => {
                // push_pop
                let returned = heap.push_pop(value);
                assert_eq!(heap.len(), old_len);
                if let Ok(&top) = heap.peek() {
                    assert!(returned >= top);
                }
            },
            5 => {
                // replace_top
                let replaced = heap.replace_top(value);
                assert_eq!(replaced.is_err(), old_len == 0);
                assert_eq!(heap.len(), old_len);
            },
            6 => {
                // clear
                heap.clear();
                assert!(heap.is_empty());
                assert_eq!(heap.pop(), Err(EmptyHeapError));
            },
            _ => unreachable!(),
        }

        assert!(heap.check_invariants().is_ok());
    }
});
