//! Runtime heap configuration.
//!
//! [`HeapBuilder`] picks the pre-allocated capacity and the pop order at
//! runtime, hiding the comparator type behind [`HeapOrder`]. Every
//! configuration is valid, so `build` cannot fail.
//!
//! ## Example
//!
//! ```rust
//! use heapkit::builder::{HeapBuilder, HeapOrder};
//!
//! let mut heap = HeapBuilder::new()
//!     .capacity(16)
//!     .order(HeapOrder::Min)
//!     .build::<u32>();
//! heap.extend([7, 3, 9]);
//! assert_eq!(heap.pop(), Ok(3));
//! ```

use std::cmp::Ordering;

use crate::ds::compare::Compare;
use crate::ds::max_heap::MaxHeap;

/// Which element a heap built by [`HeapBuilder`] pops first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HeapOrder {
    /// Largest element first.
    #[default]
    Max,
    /// Smallest element first.
    Min,
}

impl<T: Ord + ?Sized> Compare<T> for HeapOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self {
            HeapOrder::Max => a.cmp(b),
            HeapOrder::Min => b.cmp(a),
        }
    }
}

/// Builder for heaps whose order is chosen at runtime.
#[derive(Debug, Clone, Default)]
pub struct HeapBuilder {
    capacity: usize,
    order: HeapOrder,
}

impl HeapBuilder {
    /// Creates a builder for an empty max-first heap with no pre-allocation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocates room for `capacity` elements. Does not limit growth.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the pop order.
    pub fn order(mut self, order: HeapOrder) -> Self {
        self.order = order;
        self
    }

    /// Builds an empty heap.
    pub fn build<T: Ord>(&self) -> MaxHeap<T, HeapOrder> {
        MaxHeap::with_capacity_and_comparator(self.capacity, self.order)
    }

    /// Builds a heap from `values` in O(n).
    pub fn build_from<T: Ord>(&self, values: Vec<T>) -> MaxHeap<T, HeapOrder> {
        let mut heap = MaxHeap::from_vec_with(values, self.order);
        heap.reserve(self.capacity.saturating_sub(heap.len()));
        heap
    }
}
