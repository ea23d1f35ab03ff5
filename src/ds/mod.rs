pub mod compare;
pub mod max_heap;

pub use compare::{Compare, FnCompare, MinFirst, Natural};
pub use max_heap::{DrainSorted, MaxHeap, MinHeap};
