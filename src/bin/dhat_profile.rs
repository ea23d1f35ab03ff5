//! DHAT heap profiler for heapkit.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use heapkit::builder::{HeapBuilder, HeapOrder};
use heapkit::ds::MaxHeap;
use heapkit::traits::PriorityQueue;

/// Simple XorShift64 RNG for deterministic workloads.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

/// Fill with random priorities, then drain completely.
fn fill_drain<Q: PriorityQueue<u64>>(queue: &mut Q, operations: usize, seed: u64) {
    let mut rng = XorShift64::new(seed);
    for _ in 0..operations {
        queue.push(rng.next_u64());
    }
    while queue.pop().is_ok() {}
}

/// Steady state: every push is followed by a pop once the queue is warm.
fn churn<Q: PriorityQueue<u64>>(queue: &mut Q, warm: usize, operations: usize, seed: u64) {
    let mut rng = XorShift64::new(seed);
    for _ in 0..warm {
        queue.push(rng.next_u64());
    }
    for _ in 0..operations {
        queue.push(rng.next_u64());
        let _ = queue.pop();
    }
}

fn profile_max_heap_growth() {
    println!("=== Profiling MaxHeap (growth from empty) ===");
    let mut heap = MaxHeap::new();
    fill_drain(&mut heap, 100_000, 42);
    println!("  Final capacity: {}", heap.capacity());
}

fn profile_max_heap_preallocated() {
    println!("=== Profiling MaxHeap (preallocated) ===");
    let mut heap = HeapBuilder::new()
        .capacity(100_000)
        .order(HeapOrder::Max)
        .build();
    fill_drain(&mut heap, 100_000, 42);
    println!("  Final capacity: {}", heap.capacity());
}

fn profile_max_heap_churn() {
    println!("=== Profiling MaxHeap (churn) ===");
    let mut heap = MaxHeap::with_capacity(4096);
    churn(&mut heap, 4096, 100_000, 7);
    println!("  Final size: {}", heap.len());
}

fn profile_heapify() {
    println!("=== Profiling MaxHeap (heapify) ===");
    let mut rng = XorShift64::new(99);
    let values: Vec<u64> = (0..100_000).map(|_| rng.next_u64()).collect();
    let heap = MaxHeap::from(values);
    let sorted = heap.into_sorted_vec();
    println!("  Sorted: {}", sorted.len());
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    println!("heapkit DHAT Heap Profiling");
    println!("===========================\n");

    profile_max_heap_growth();
    profile_max_heap_preallocated();
    profile_max_heap_churn();
    profile_heapify();

    println!("\n===========================");
    println!("Profiling complete!");
    println!(
        "View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>"
    );
}
