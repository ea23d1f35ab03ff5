//! Priority-queue contract.
//!
//! [`PriorityQueue`] is the minimal surface shared by every max-first queue in
//! this crate: insert, inspect the maximum, remove the maximum. Code written
//! against the trait runs unchanged on [`MaxHeap`](crate::ds::MaxHeap) and on
//! the standard library's [`BinaryHeap`], which the test suite uses as a
//! reference model.
//!
//! ## Example
//!
//! ```
//! use std::collections::BinaryHeap;
//!
//! use heapkit::ds::MaxHeap;
//! use heapkit::traits::PriorityQueue;
//!
//! fn top_three<Q: PriorityQueue<u32>>(queue: &mut Q, input: &[u32]) -> Vec<u32> {
//!     for &value in input {
//!         queue.push(value);
//!     }
//!     (0..3).filter_map(|_| queue.pop().ok()).collect()
//! }
//!
//! let input = [4, 19, 7, 3, 12];
//! assert_eq!(top_three(&mut MaxHeap::new(), &input), vec![19, 12, 7]);
//! assert_eq!(top_three(&mut BinaryHeap::new(), &input), vec![19, 12, 7]);
//! ```

use std::collections::BinaryHeap;

use crate::ds::compare::Compare;
use crate::ds::max_heap::MaxHeap;
use crate::error::EmptyHeapError;

/// Max-first priority queue.
///
/// `pop` and `peek` report [`EmptyHeapError`] instead of a sentinel value
/// when the queue is empty; neither changes the queue in that case.
pub trait PriorityQueue<T> {
    /// Returns the number of queued elements.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is queued.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `value`.
    fn push(&mut self, value: T);

    /// Removes and returns the highest-priority element.
    fn pop(&mut self) -> Result<T, EmptyHeapError>;

    /// Returns the highest-priority element without removing it.
    fn peek(&self) -> Result<&T, EmptyHeapError>;
}

impl<T, C> PriorityQueue<T> for MaxHeap<T, C>
where
    C: Compare<T>,
{
    #[inline]
    fn len(&self) -> usize {
        MaxHeap::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        MaxHeap::is_empty(self)
    }

    #[inline]
    fn push(&mut self, value: T) {
        MaxHeap::push(self, value);
    }

    #[inline]
    fn pop(&mut self) -> Result<T, EmptyHeapError> {
        MaxHeap::pop(self)
    }

    #[inline]
    fn peek(&self) -> Result<&T, EmptyHeapError> {
        MaxHeap::peek(self)
    }
}

impl<T: Ord> PriorityQueue<T> for BinaryHeap<T> {
    #[inline]
    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    #[inline]
    fn push(&mut self, value: T) {
        BinaryHeap::push(self, value);
    }

    #[inline]
    fn pop(&mut self) -> Result<T, EmptyHeapError> {
        BinaryHeap::pop(self).ok_or(EmptyHeapError)
    }

    #[inline]
    fn peek(&self) -> Result<&T, EmptyHeapError> {
        BinaryHeap::peek(self).ok_or(EmptyHeapError)
    }
}
