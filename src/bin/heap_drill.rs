//! Console drill for the max-heap.
//!
//! Replays the reference push/pop scenarios against every `PriorityQueue`
//! implementation and logs one PASS/FAIL line per check. Exits with status 1
//! if any check fails.
//!
//! Run with: cargo run --bin heap_drill --features drill
//! Verbose:  RUST_LOG=debug cargo run --bin heap_drill --features drill

use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::process::ExitCode;

use heapkit::builder::{HeapBuilder, HeapOrder};
use heapkit::ds::MaxHeap;
use heapkit::error::EmptyHeapError;
use heapkit::traits::PriorityQueue;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Tally {
    passed: usize,
    failed: usize,
}

impl Tally {
    fn check<V: Debug + PartialEq>(&mut self, scenario: &str, expected: V, observed: V) {
        if expected == observed {
            self.passed += 1;
            info!(scenario, ?observed, "PASS");
        } else {
            self.failed += 1;
            error!(scenario, ?expected, ?observed, "FAIL");
        }
    }
}

fn drain<Q: PriorityQueue<i32>>(queue: &mut Q) -> Vec<i32> {
    let mut popped = Vec::with_capacity(queue.len());
    while !queue.is_empty() {
        match queue.pop() {
            Ok(value) => popped.push(value),
            Err(_) => break,
        }
    }
    popped
}

fn run_queue_scenarios<Q: PriorityQueue<i32>>(name: &str, make: impl Fn() -> Q, tally: &mut Tally) {
    debug!(queue = name, "running queue scenarios");

    let mut queue = make();
    tally.check(
        &format!("{name}: pop on empty"),
        Err(EmptyHeapError),
        queue.pop(),
    );

    for value in [20, 30, 10, 40] {
        queue.push(value);
    }
    tally.check(
        &format!("{name}: pop order"),
        vec![40, 30, 20, 10],
        drain(&mut queue),
    );
    tally.check(&format!("{name}: empty after drain"), true, queue.is_empty());

    let mut queue = make();
    queue.push(5);
    let peeks: Vec<_> = (0..3).map(|_| queue.peek().copied()).collect();
    tally.check(
        &format!("{name}: repeated peek"),
        vec![Ok(5), Ok(5), Ok(5)],
        peeks,
    );
    tally.check(&format!("{name}: peek keeps size"), 1, queue.len());

    let mut queue = make();
    for value in [1, 2, 3] {
        queue.push(value);
    }
    tally.check(&format!("{name}: pop max of three"), Ok(3), queue.pop());
    tally.check(
        &format!("{name}: next max visible"),
        Ok(2),
        queue.peek().copied(),
    );
}

fn run_layout_scenario(tally: &mut Tally) {
    let mut heap = MaxHeap::new();
    for value in [20, 30, 10, 40] {
        heap.push(value);
    }
    tally.check("max_heap: push layout", vec![40, 30, 10, 20], heap.as_slice().to_vec());
    tally.check("max_heap: invariants", Ok(()), heap.check_invariants());
}

fn run_builder_scenario(tally: &mut Tally) {
    let mut heap = HeapBuilder::new().order(HeapOrder::Min).build();
    heap.extend([20, 30, 10, 40]);
    tally.check(
        "builder(min): pop order",
        vec![10, 20, 30, 40],
        heap.into_sorted_vec(),
    );
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut tally = Tally::default();
    run_queue_scenarios("max_heap", MaxHeap::<i32>::new, &mut tally);
    run_queue_scenarios("binary_heap", BinaryHeap::<i32>::new, &mut tally);
    run_layout_scenario(&mut tally);
    run_builder_scenario(&mut tally);

    info!(passed = tally.passed, failed = tally.failed, "drill complete");
    if tally.failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
