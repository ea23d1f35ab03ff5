//! Example demonstrating the runtime HeapBuilder API.
//!
//! Run with: cargo run --example basic_builder

use std::cmp::Ordering;

use heapkit::builder::{HeapBuilder, HeapOrder};
use heapkit::ds::{FnCompare, MaxHeap};

#[derive(Debug)]
struct Task {
    name: &'static str,
    deadline: u32,
}

fn main() {
    println!("=== HeapBuilder Examples ===\n");

    // Example 1: max-first heap
    println!("1. Max order");
    let mut max = HeapBuilder::new().capacity(8).build::<u32>();
    max.extend([3, 17, 8]);
    println!("   pop -> {:?} (largest first)", max.pop());
    println!();

    // Example 2: min-first heap chosen at runtime
    println!("2. Min order");
    let order = if std::env::args().any(|arg| arg == "--max") {
        HeapOrder::Max
    } else {
        HeapOrder::Min
    };
    let mut min = HeapBuilder::new().order(order).build_from(vec![3, 17, 8]);
    println!("   order = {:?}, pop -> {:?}", order, min.pop());
    println!();

    // Example 3: earliest deadline first with a closure comparator
    println!("3. Closure comparator");
    let earliest_first = FnCompare::new(|a: &Task, b: &Task| -> Ordering {
        b.deadline.cmp(&a.deadline)
    });
    let mut tasks = MaxHeap::with_comparator(earliest_first);
    tasks.push(Task { name: "report", deadline: 30 });
    tasks.push(Task { name: "backup", deadline: 5 });
    tasks.push(Task { name: "deploy", deadline: 12 });
    for task in tasks.drain_sorted() {
        println!("   {} (due {})", task.name, task.deadline);
    }
}

// Expected output (without --max):
// === HeapBuilder Examples ===
//
// 1. Max order
//    pop -> Ok(17) (largest first)
//
// 2. Min order
//    order = Min, pop -> Ok(3)
//
// 3. Closure comparator
//    backup (due 5)
//    deploy (due 12)
//    report (due 30)
