use heapkit::ds::MaxHeap;

fn main() {
    let mut heap = MaxHeap::new();

    heap.push(20);
    heap.push(30);
    heap.push(10);
    heap.push(40);

    println!("layout: {:?}", heap.as_slice());

    match heap.peek() {
        Ok(top) => println!("peek: {}", top),
        Err(err) => println!("peek failed: {}", err),
    }

    while let Ok(value) = heap.pop() {
        println!("pop: {}", value);
    }

    if let Err(err) = heap.pop() {
        println!("pop on empty: {}", err);
    }
}

// Expected output:
// layout: [40, 30, 10, 20]
// peek: 40
// pop: 40
// pop: 30
// pop: 20
// pop: 10
// pop on empty: heap is empty
//
// Explanation: each push sifts the new value up past smaller parents, so 40
// climbs to the root. Each pop moves the last element to the root and sifts
// it down, so values leave in descending order.
