//! Array-backed binary max-heap.
//!
//! A priority queue whose root always holds the highest-priority element.
//! Elements live contiguously in a `Vec<T>` that is read as a complete binary
//! tree; no node allocations and no pointers between elements.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            MaxHeap Layout                               │
//! │                                                                         │
//! │   data: Vec<T>          index:   0    1    2    3                       │
//! │                                ┌────┬────┬────┬────┐                    │
//! │                                │ 40 │ 30 │ 10 │ 20 │                    │
//! │                                └────┴────┴────┴────┘                    │
//! │                                                                         │
//! │   Implicit tree:                  40            parent(i) = (i - 1) / 2 │
//! │                                  /  \           left(i)   = 2i + 1      │
//! │                                30    10         right(i)  = 2i + 2      │
//! │                               /                                         │
//! │                             20                                          │
//! │                                                                         │
//! │   cmp: C   (decides "greater", i.e. closer to the root)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//!
//! Push Flow (sift up)
//! ───────────────────
//!   push(40) on [30, 20, 10]:
//!     1. data.push(40)             → [30, 20, 10, 40]
//!     2. 40 > parent 20 → swap     → [30, 40, 10, 20]
//!     3. 40 > parent 30 → swap     → [40, 30, 10, 20]
//!     4. index 0 is the root → stop
//!
//! Pop Flow (sift down)
//! ────────────────────
//!   pop() on [40, 30, 10, 20]:
//!     1. take root 40, move last (20) to the root → [20, 30, 10]
//!     2. left 30 > 20 → target = left; right 10 > 30? no
//!     3. swap with target          → [30, 20, 10]
//!     4. no children left → stop, return 40
//! ```
//!
//! ## Key Concepts
//!
//! - **Max-heap property**: every parent ranks >= each of its children under
//!   the comparator; checked by [`check_invariants`](MaxHeap::check_invariants)
//! - **Strict comparisons**: an element only moves past another when it ranks
//!   strictly higher, so equal elements never swap
//! - **Left-biased ties**: during sift down the right child only wins when it
//!   ranks strictly above the left child
//! - **Pluggable order**: [`Compare`] supplies the order; [`MinHeap`] is the
//!   same structure with [`MinFirst`]
//!
//! ## Operations
//!
//! | Operation         | Description                                | Complexity |
//! |-------------------|--------------------------------------------|------------|
//! | `push`            | Append and sift up                         | O(log n)   |
//! | `pop`             | Remove root, move last to root, sift down  | O(log n)   |
//! | `peek`            | Borrow the root                            | O(1)       |
//! | `push_pop`        | Push then pop in a single sift             | O(log n)   |
//! | `replace_top`     | Pop then push in a single sift             | O(log n)   |
//! | `from_vec_with`   | Bottom-up heapify                          | O(n)       |
//! | `into_sorted_vec` | Drain in non-increasing order              | O(n log n) |
//! | `check_invariants`| Verify parent >= child everywhere          | O(n)       |
//!
//! ## Example Usage
//!
//! ```
//! use heapkit::ds::MaxHeap;
//! use heapkit::error::EmptyHeapError;
//!
//! let mut heap = MaxHeap::new();
//! heap.push(20);
//! heap.push(30);
//! heap.push(10);
//! heap.push(40);
//!
//! assert_eq!(heap.as_slice(), &[40, 30, 10, 20]);
//! assert_eq!(heap.peek(), Ok(&40));
//!
//! assert_eq!(heap.pop(), Ok(40));
//! assert_eq!(heap.pop(), Ok(30));
//! assert_eq!(heap.pop(), Ok(20));
//! assert_eq!(heap.pop(), Ok(10));
//! assert_eq!(heap.pop(), Err(EmptyHeapError));
//! assert!(heap.is_empty());
//! ```
//!
//! ## Thread Safety
//!
//! `MaxHeap` has no internal locking. Wrap it in a mutex for shared access.

use std::fmt;
use std::iter::FusedIterator;

use crate::ds::compare::{Compare, MinFirst, Natural};
use crate::error::{EmptyHeapError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::HeapMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::HeapMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    HeapMetricsReadRecorder, HeapMetricsRecorder, MetricsReset, MetricsSnapshotProvider,
};

#[inline(always)]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline(always)]
fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// Binary max-heap over a contiguous vector.
///
/// The element that ranks highest under `C` is always at the root. With the
/// default [`Natural`] comparator that is the largest element by `Ord`.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `C`: Ordering strategy (defaults to [`Natural`])
///
/// # Example
///
/// ```
/// use heapkit::ds::MaxHeap;
///
/// let mut heap = MaxHeap::new();
/// heap.push(1);
/// heap.push(2);
/// heap.push(3);
///
/// assert_eq!(heap.pop(), Ok(3));
/// assert_eq!(heap.peek(), Ok(&2));
/// ```
#[derive(Clone)]
pub struct MaxHeap<T, C = Natural> {
    data: Vec<T>,
    cmp: C,
    #[cfg(feature = "metrics")]
    metrics: HeapMetrics,
}

/// Min-heap: a [`MaxHeap`] ordered by [`MinFirst`].
///
/// ```
/// use heapkit::ds::MinHeap;
///
/// let mut heap: MinHeap<u32> = MinHeap::default();
/// heap.extend([5, 1, 3]);
/// assert_eq!(heap.pop(), Ok(1));
/// ```
pub type MinHeap<T> = MaxHeap<T, MinFirst>;

impl<T: Ord> MaxHeap<T> {
    /// Creates an empty heap ordered by `Ord`.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MaxHeap;
    ///
    /// let heap: MaxHeap<u32> = MaxHeap::new();
    /// assert!(heap.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Creates an empty heap with room for `capacity` elements.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MaxHeap;
    ///
    /// let heap: MaxHeap<u64> = MaxHeap::with_capacity(64);
    /// assert!(heap.capacity() >= 64);
    /// assert!(heap.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<T, C> MaxHeap<T, C>
where
    C: Compare<T>,
{
    /// Creates an empty heap ordered by `cmp`.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::{MaxHeap, MinFirst};
    ///
    /// let mut heap = MaxHeap::with_comparator(MinFirst);
    /// heap.push(4);
    /// heap.push(2);
    /// assert_eq!(heap.peek(), Ok(&2));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_capacity_and_comparator(0, cmp)
    }

    /// Creates an empty heap ordered by `cmp` with room for `capacity` elements.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
            #[cfg(feature = "metrics")]
            metrics: HeapMetrics::default(),
        }
    }

    /// Builds a heap from an arbitrary vector in O(n).
    ///
    /// Reuses the vector's allocation and sifts every internal node down,
    /// from the last parent back to the root.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::{MaxHeap, Natural};
    ///
    /// let mut heap = MaxHeap::from_vec_with(vec![3, 9, 1, 7], Natural);
    /// assert_eq!(heap.pop(), Ok(9));
    /// assert_eq!(heap.pop(), Ok(7));
    /// ```
    pub fn from_vec_with(data: Vec<T>, cmp: C) -> Self {
        let mut heap = Self {
            data,
            cmp,
            #[cfg(feature = "metrics")]
            metrics: HeapMetrics::default(),
        };
        heap.heapify();
        heap
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap holds no elements.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MaxHeap;
    ///
    /// let mut heap = MaxHeap::new();
    /// assert!(heap.is_empty());
    ///
    /// heap.push(1);
    /// assert!(!heap.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the backing vector holds without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Shrinks the backing vector to fit the current contents.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Returns the comparator.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Adds `value` and restores heap order by sifting it up.
    ///
    /// The new element swaps with its parent while it ranks strictly higher,
    /// stopping at the root or at a parent that ranks >= it.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MaxHeap;
    ///
    /// let mut heap = MaxHeap::new();
    /// heap.push(10);
    /// heap.push(30);
    /// assert_eq!(heap.as_slice(), &[30, 10]);
    /// assert_eq!(heap.len(), 2);
    /// ```
    pub fn push(&mut self, value: T) {
        #[cfg(feature = "metrics")]
        self.metrics.record_push();

        self.data.push(value);
        let last = self.data.len() - 1;
        self.sift_up(last);
    }

    /// Removes and returns the highest-ranked element.
    ///
    /// The last element is moved into the root and sifted down. Returns
    /// [`EmptyHeapError`] and leaves the heap untouched when it is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MaxHeap;
    /// use heapkit::error::EmptyHeapError;
    ///
    /// let mut heap = MaxHeap::new();
    /// assert_eq!(heap.pop(), Err(EmptyHeapError));
    ///
    /// heap.push(2);
    /// heap.push(8);
    /// assert_eq!(heap.pop(), Ok(8));
    /// assert_eq!(heap.pop(), Ok(2));
    /// assert!(heap.is_empty());
    /// ```
    pub fn pop(&mut self) -> Result<T, EmptyHeapError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_call();

        let Some(mut top) = self.data.pop() else {
            #[cfg(feature = "metrics")]
            self.metrics.record_pop_empty();
            return Err(EmptyHeapError);
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_pop_found();

        if !self.data.is_empty() {
            // `top` currently holds the old last element; trade it for the root.
            std::mem::swap(&mut top, &mut self.data[0]);
            self.sift_down_root();
        }
        Ok(top)
    }

    /// Returns the highest-ranked element without removing it.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MaxHeap;
    /// use heapkit::error::EmptyHeapError;
    ///
    /// let mut heap = MaxHeap::new();
    /// assert_eq!(heap.peek(), Err(EmptyHeapError));
    ///
    /// heap.push(5);
    /// assert_eq!(heap.peek(), Ok(&5));
    /// assert_eq!(heap.peek(), Ok(&5));
    /// assert_eq!(heap.len(), 1);
    /// ```
    pub fn peek(&self) -> Result<&T, EmptyHeapError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_call();

        let top = self.data.first().ok_or(EmptyHeapError)?;

        #[cfg(feature = "metrics")]
        self.metrics.record_peek_found();

        Ok(top)
    }

    /// Pushes `value` and pops the highest-ranked element in one sift.
    ///
    /// Returns `value` itself when the heap is empty or when `value` ranks >=
    /// the current root; otherwise the root is returned and `value` takes its
    /// place. Metrics count it as one push and one successful pop either way.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MaxHeap;
    ///
    /// let mut heap: MaxHeap<u32> = [5, 3].into_iter().collect();
    /// assert_eq!(heap.push_pop(9), 9);
    /// assert_eq!(heap.push_pop(1), 5);
    /// assert_eq!(heap.into_sorted_vec(), vec![3, 1]);
    /// ```
    pub fn push_pop(&mut self, value: T) -> T {
        #[cfg(feature = "metrics")]
        {
            self.metrics.record_push();
            self.metrics.record_pop_call();
            self.metrics.record_pop_found();
        }

        match self.data.first() {
            Some(top) if self.cmp.gt(top, &value) => {
                let top = std::mem::replace(&mut self.data[0], value);
                self.sift_down_root();
                top
            },
            _ => value,
        }
    }

    /// Replaces the highest-ranked element with `value` and returns it.
    ///
    /// Equivalent to `pop` followed by `push`, but sifts only once. Returns
    /// [`EmptyHeapError`] (and drops nothing) when the heap is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MaxHeap;
    ///
    /// let mut heap: MaxHeap<u32> = [8, 4, 6].into_iter().collect();
    /// assert_eq!(heap.replace_top(1), Ok(8));
    /// assert_eq!(heap.peek(), Ok(&6));
    /// ```
    pub fn replace_top(&mut self, value: T) -> Result<T, EmptyHeapError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_call();

        let Some(slot) = self.data.first_mut() else {
            #[cfg(feature = "metrics")]
            self.metrics.record_pop_empty();
            return Err(EmptyHeapError);
        };
        let top = std::mem::replace(slot, value);

        #[cfg(feature = "metrics")]
        {
            self.metrics.record_pop_found();
            self.metrics.record_push();
        }

        self.sift_down_root();
        Ok(top)
    }

    /// Removes all elements, keeping the allocation.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.data.clear();
    }

    /// Removes all elements and releases the allocation.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MaxHeap;
    ///
    /// let mut heap: MaxHeap<u32> = MaxHeap::with_capacity(1024);
    /// heap.push(1);
    /// heap.clear_shrink();
    /// assert!(heap.is_empty());
    /// assert_eq!(heap.capacity(), 0);
    /// ```
    pub fn clear_shrink(&mut self) {
        self.clear();
        self.data.shrink_to_fit();
    }

    /// Returns the backing sequence in heap order.
    ///
    /// Index 0 is the root; the children of `i` are `2i + 1` and `2i + 2`.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in heap order (not sorted).
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap and returns the backing vector in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap and returns its elements highest-ranked first.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MaxHeap;
    ///
    /// let heap: MaxHeap<i32> = [4, -1, 9, 4].into_iter().collect();
    /// assert_eq!(heap.into_sorted_vec(), vec![9, 4, 4, -1]);
    /// ```
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.drain_sorted().collect()
    }

    /// Returns an iterator that pops elements highest-ranked first.
    ///
    /// Elements not consumed by the time the iterator is dropped are removed
    /// as well, so the heap is always empty afterwards.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MaxHeap;
    ///
    /// let mut heap: MaxHeap<u8> = [2, 7, 5].into_iter().collect();
    /// let top_two: Vec<u8> = heap.drain_sorted().take(2).collect();
    /// assert_eq!(top_two, vec![7, 5]);
    /// assert!(heap.is_empty());
    /// ```
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C> {
        DrainSorted { heap: self }
    }

    /// Returns an approximate memory footprint in bytes.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.data.capacity() * std::mem::size_of::<T>()
    }

    /// Verifies the max-heap property at every index.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MaxHeap;
    ///
    /// let heap: MaxHeap<u32> = (0..100).collect();
    /// assert!(heap.check_invariants().is_ok());
    /// ```
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        for index in 1..self.data.len() {
            let parent = parent(index);
            if self.cmp.gt(&self.data[index], &self.data[parent]) {
                return Err(InvariantError::new(format!(
                    "heap[{}] ranks above its parent heap[{}] (len {})",
                    index,
                    parent,
                    self.data.len()
                )));
            }
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    /// Validates internal invariants (debug/test builds only).
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("max-heap invariant violated: {}", err);
        }
    }

    fn heapify(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_heapify();

        let len = self.data.len();
        let swaps: usize = (0..len / 2)
            .rev()
            .map(|index| self.sift_down(index))
            .sum();

        #[cfg(feature = "metrics")]
        self.metrics.record_heapify_swaps(swaps as u64);
        #[cfg(not(feature = "metrics"))]
        let _ = swaps;
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if !self.cmp.gt(&self.data[index], &self.data[parent]) {
                break;
            }
            self.data.swap(index, parent);
            index = parent;

            #[cfg(feature = "metrics")]
            self.metrics.record_sift_up_swap();
        }
    }

    fn sift_down_root(&mut self) {
        let swaps = self.sift_down(0);

        #[cfg(feature = "metrics")]
        self.metrics.record_sift_down_swaps(swaps as u64);
        #[cfg(not(feature = "metrics"))]
        let _ = swaps;
    }

    /// Sinks the element at `index` and returns how many swaps it took.
    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.data.len();
        let mut swaps = 0;
        loop {
            let left = left_child(index);
            let right = left + 1;
            let mut target = None;

            if left < len && self.cmp.gt(&self.data[left], &self.data[index]) {
                target = Some(left);
            }
            if right < len {
                // Right only displaces an already chosen left child when it
                // ranks strictly higher, so ties stay on the left.
                let rival = target.unwrap_or(index);
                if self.cmp.gt(&self.data[right], &self.data[rival]) {
                    target = Some(right);
                }
            }

            let Some(child) = target else {
                break;
            };
            self.data.swap(index, child);
            index = child;
            swaps += 1;
        }
        swaps
    }
}

#[cfg(feature = "metrics")]
impl<T, C> MaxHeap<T, C>
where
    C: Compare<T>,
{
    /// Returns a snapshot of the operation counters.
    pub fn metrics_snapshot(&self) -> HeapMetricsSnapshot {
        self.snapshot()
    }
}

#[cfg(feature = "metrics")]
impl<T, C> MetricsSnapshotProvider<HeapMetricsSnapshot> for MaxHeap<T, C>
where
    C: Compare<T>,
{
    fn snapshot(&self) -> HeapMetricsSnapshot {
        self.metrics.snapshot(self.data.len(), self.data.capacity())
    }
}

#[cfg(feature = "metrics")]
impl<T, C> MetricsReset for MaxHeap<T, C>
where
    C: Compare<T>,
{
    fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

impl<T, C: Default> Default for MaxHeap<T, C> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            cmp: C::default(),
            #[cfg(feature = "metrics")]
            metrics: HeapMetrics::default(),
        }
    }
}

impl<T: fmt::Debug, C: fmt::Debug> fmt::Debug for MaxHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaxHeap")
            .field("data", &self.data)
            .field("cmp", &self.cmp)
            .finish()
    }
}

impl<T: Ord> From<Vec<T>> for MaxHeap<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec_with(data, Natural)
    }
}

impl<T, C> From<MaxHeap<T, C>> for Vec<T> {
    fn from(heap: MaxHeap<T, C>) -> Self {
        heap.data
    }
}

impl<T, C> FromIterator<T> for MaxHeap<T, C>
where
    C: Compare<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec_with(iter.into_iter().collect(), C::default())
    }
}

impl<T, C> Extend<T> for MaxHeap<T, C>
where
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a MaxHeap<T, C>
where
    C: Compare<T>,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Draining iterator returned by [`MaxHeap::drain_sorted`].
pub struct DrainSorted<'a, T, C>
where
    C: Compare<T>,
{
    heap: &'a mut MaxHeap<T, C>,
}

impl<T, C> Iterator for DrainSorted<'_, T, C>
where
    C: Compare<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        // Exhaustion is not a failed pop.
        if self.heap.is_empty() {
            return None;
        }
        self.heap.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, C> ExactSizeIterator for DrainSorted<'_, T, C> where C: Compare<T> {}

impl<T, C> FusedIterator for DrainSorted<'_, T, C> where C: Compare<T> {}

impl<T, C> Drop for DrainSorted<'_, T, C>
where
    C: Compare<T>,
{
    fn drop(&mut self) {
        // Leftovers are discarded without counting a `clear`.
        self.heap.data.clear();
    }
}

impl<T: fmt::Debug, C> fmt::Debug for DrainSorted<'_, T, C>
where
    C: Compare<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DrainSorted").field(&self.heap.data).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ds::compare::FnCompare;

    // ==============================================
    // Reference scenarios
    // ==============================================

    #[test]
    fn push_sequence_produces_expected_layout() {
        let mut heap = MaxHeap::new();
        heap.push(20);
        heap.push(30);
        heap.push(10);
        heap.push(40);
        assert_eq!(heap.as_slice(), &[40, 30, 10, 20]);
        heap.debug_validate_invariants();
    }

    #[test]
    fn pop_drains_in_descending_order() {
        let mut heap = MaxHeap::new();
        for value in [20, 30, 10, 40] {
            heap.push(value);
        }

        let mut popped = Vec::new();
        while !heap.is_empty() {
            popped.push(heap.pop().unwrap());
            heap.debug_validate_invariants();
        }
        assert_eq!(popped, vec![40, 30, 20, 10]);
        assert!(heap.is_empty());
    }

    #[test]
    fn pop_on_new_heap_reports_empty() {
        let mut heap: MaxHeap<i32> = MaxHeap::new();
        assert_eq!(heap.pop(), Err(EmptyHeapError));
        assert_eq!(heap.len(), 0);
    }

    #[test]
    fn peek_is_idempotent() {
        let mut heap = MaxHeap::new();
        heap.push(5);
        for _ in 0..3 {
            assert_eq!(heap.peek(), Ok(&5));
        }
        assert_eq!(heap.len(), 1);
    }

    #[test]
    fn pop_then_peek_exposes_next_max() {
        let mut heap = MaxHeap::new();
        heap.push(1);
        heap.push(2);
        heap.push(3);
        assert_eq!(heap.pop(), Ok(3));
        assert_eq!(heap.peek(), Ok(&2));
    }

    // ==============================================
    // Edge cases
    // ==============================================

    #[test]
    fn peek_on_empty_reports_empty() {
        let heap: MaxHeap<u8> = MaxHeap::new();
        assert_eq!(heap.peek(), Err(EmptyHeapError));
    }

    #[test]
    fn pop_single_element_empties_heap() {
        let mut heap = MaxHeap::new();
        heap.push(42);
        assert_eq!(heap.pop(), Ok(42));
        assert!(heap.is_empty());
        assert_eq!(heap.pop(), Err(EmptyHeapError));
    }

    #[test]
    fn equal_elements_do_not_swap_on_push() {
        let by_key = FnCompare::new(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0));
        let mut heap = MaxHeap::with_comparator(by_key);
        heap.push((3, 'a'));
        heap.push((3, 'b'));
        heap.push((3, 'c'));
        let tags: Vec<char> = heap.iter().map(|&(_, tag)| tag).collect();
        assert_eq!(tags, vec!['a', 'b', 'c']);
    }

    #[test]
    fn sift_down_prefers_left_child_on_ties() {
        let by_key = FnCompare::new(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0));
        let mut heap = MaxHeap::with_comparator(by_key);
        heap.push((9, 'a'));
        heap.push((7, 'l'));
        heap.push((7, 'r'));
        heap.push((1, 'x'));

        assert_eq!(heap.pop(), Ok((9, 'a')));
        assert_eq!(heap.as_slice(), &[(7, 'l'), (1, 'x'), (7, 'r')]);
    }

    #[test]
    fn sift_down_takes_strictly_larger_right_child() {
        let mut heap = MaxHeap::new();
        for value in [10, 3, 8, 1] {
            heap.push(value);
        }
        assert_eq!(heap.as_slice(), &[10, 3, 8, 1]);
        assert_eq!(heap.pop(), Ok(10));
        assert_eq!(heap.as_slice(), &[8, 3, 1]);
    }

    #[test]
    fn duplicates_are_all_returned() {
        let mut heap = MaxHeap::new();
        heap.extend([4, 4, 1, 4, 1]);
        assert_eq!(heap.into_sorted_vec(), vec![4, 4, 4, 1, 1]);
    }

    // ==============================================
    // Construction and bulk operations
    // ==============================================

    #[test]
    fn from_vec_heapifies() {
        let heap = MaxHeap::from(vec![1, 5, 3, 9, 2, 8, 7]);
        heap.debug_validate_invariants();
        assert_eq!(heap.peek(), Ok(&9));
        assert_eq!(heap.len(), 7);
    }

    #[test]
    fn from_iter_and_extend_agree_on_order() {
        let collected: MaxHeap<i32> = (0..50).rev().collect();
        let mut extended = MaxHeap::new();
        extended.extend(0..50);
        collected.debug_validate_invariants();
        extended.debug_validate_invariants();
        assert_eq!(collected.into_sorted_vec(), extended.into_sorted_vec());
    }

    #[test]
    fn min_heap_pops_smallest_first() {
        let mut heap: MinHeap<i32> = MinHeap::default();
        heap.extend([5, -2, 9, 0]);
        heap.debug_validate_invariants();
        assert_eq!(heap.into_sorted_vec(), vec![-2, 0, 5, 9]);
    }

    #[test]
    fn push_pop_returns_value_when_not_below_root() {
        let mut heap: MaxHeap<u32> = MaxHeap::new();
        assert_eq!(heap.push_pop(3), 3);
        assert!(heap.is_empty());

        heap.push(5);
        assert_eq!(heap.push_pop(5), 5);
        assert_eq!(heap.push_pop(2), 5);
        assert_eq!(heap.as_slice(), &[2]);
    }

    #[test]
    fn replace_top_on_empty_reports_empty() {
        let mut heap: MaxHeap<u32> = MaxHeap::new();
        assert_eq!(heap.replace_top(1), Err(EmptyHeapError));
        assert!(heap.is_empty());
    }

    #[test]
    fn replace_top_restores_order() {
        let mut heap: MaxHeap<u32> = [10, 9, 8, 7, 6].into_iter().collect();
        assert_eq!(heap.replace_top(0), Ok(10));
        heap.debug_validate_invariants();
        assert_eq!(heap.peek(), Ok(&9));
        assert_eq!(heap.len(), 5);
    }

    #[test]
    fn drain_sorted_empties_heap_when_dropped_early() {
        let mut heap: MaxHeap<u32> = (0..10).collect();
        {
            let mut drain = heap.drain_sorted();
            assert_eq!(drain.len(), 10);
            assert_eq!(drain.next(), Some(9));
            assert_eq!(drain.len(), 9);
        }
        assert!(heap.is_empty());
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut heap: MaxHeap<u32> = MaxHeap::with_capacity(32);
        heap.extend(0..16);
        heap.clear();
        assert!(heap.is_empty());
        assert!(heap.capacity() >= 32);
    }

    #[test]
    fn into_vec_returns_heap_order() {
        let mut heap = MaxHeap::new();
        heap.extend([1, 2, 3]);
        assert_eq!(heap.into_vec(), vec![3, 1, 2]);
    }

    #[test]
    fn approx_bytes_tracks_capacity() {
        let small: MaxHeap<u64> = MaxHeap::new();
        let large: MaxHeap<u64> = MaxHeap::with_capacity(128);
        assert!(large.approx_bytes() >= small.approx_bytes() + 128 * 8);
    }

    #[test]
    fn check_invariants_reports_violation() {
        let heap = MaxHeap {
            data: vec![1, 5, 0],
            cmp: Natural,
            #[cfg(feature = "metrics")]
            metrics: HeapMetrics::default(),
        };
        let err = heap.check_invariants().unwrap_err();
        assert!(err.message().contains("heap[1]"));
    }

    #[test]
    #[should_panic(expected = "max-heap invariant violated")]
    fn debug_validate_panics_on_violation() {
        let heap = MaxHeap {
            data: vec![0, 0, 3],
            cmp: Natural,
            #[cfg(feature = "metrics")]
            metrics: HeapMetrics::default(),
        };
        heap.debug_validate_invariants();
    }

    #[test]
    fn debug_output_lists_elements() {
        let mut heap = MaxHeap::new();
        heap.push(1);
        let dbg = format!("{:?}", heap);
        assert!(dbg.contains("MaxHeap"));
        assert!(dbg.contains("[1]"));
    }

    // ==============================================
    // Property tests
    // ==============================================

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        /// `Some(v)` pushes `v`, `None` pops.
        fn ops() -> impl Strategy<Value = Vec<Option<i16>>> {
            prop::collection::vec(prop::option::weighted(0.6, any::<i16>()), 0..200)
        }

        proptest! {
            /// Property: heap order holds after every push and pop
            #[cfg_attr(miri, ignore)]
            #[test]
            fn prop_invariant_holds_after_every_op(ops in ops()) {
                let mut heap = MaxHeap::new();
                for op in ops {
                    match op {
                        Some(value) => heap.push(value),
                        None => {
                            let _ = heap.pop();
                        },
                    }
                    prop_assert!(heap.check_invariants().is_ok());
                }
            }

            /// Property: popping everything yields a non-increasing sequence
            #[cfg_attr(miri, ignore)]
            #[test]
            fn prop_pops_are_non_increasing(
                values in prop::collection::vec(any::<i32>(), 0..300)
            ) {
                let mut heap = MaxHeap::new();
                for &value in &values {
                    heap.push(value);
                }

                let mut popped = Vec::with_capacity(values.len());
                while let Ok(value) = heap.pop() {
                    popped.push(value);
                }

                let mut expected = values;
                expected.sort_unstable_by(|a, b| b.cmp(a));
                prop_assert_eq!(popped, expected);
            }

            /// Property: push grows by one, pop shrinks by one, empty ops report EmptyHeapError
            #[cfg_attr(miri, ignore)]
            #[test]
            fn prop_size_is_conserved(ops in ops()) {
                let mut heap = MaxHeap::new();
                for op in ops {
                    let before = heap.len();
                    match op {
                        Some(value) => {
                            heap.push(value);
                            prop_assert_eq!(heap.len(), before + 1);
                        },
                        None if before == 0 => {
                            prop_assert_eq!(heap.pop(), Err(EmptyHeapError));
                            prop_assert_eq!(heap.peek(), Err(EmptyHeapError));
                            prop_assert_eq!(heap.len(), 0);
                        },
                        None => {
                            prop_assert!(heap.pop().is_ok());
                            prop_assert_eq!(heap.len(), before - 1);
                        },
                    }
                }
            }

            /// Property: peek neither changes the result nor the layout
            #[cfg_attr(miri, ignore)]
            #[test]
            fn prop_peek_is_idempotent(
                values in prop::collection::vec(any::<u16>(), 1..100),
                repeats in 1usize..8
            ) {
                let heap: MaxHeap<u16> = values.iter().copied().collect();
                let layout = heap.as_slice().to_vec();
                let first = *heap.peek().unwrap();

                for _ in 0..repeats {
                    prop_assert_eq!(heap.peek(), Ok(&first));
                }
                prop_assert_eq!(heap.as_slice(), layout.as_slice());
                prop_assert_eq!(Some(&first), values.iter().max());
            }

            /// Property: heapify and repeated push yield the same pop sequence
            #[cfg_attr(miri, ignore)]
            #[test]
            fn prop_heapify_matches_pushes(
                values in prop::collection::vec(any::<i64>(), 0..200)
            ) {
                let heapified = MaxHeap::from(values.clone());
                prop_assert!(heapified.check_invariants().is_ok());

                let mut pushed = MaxHeap::new();
                pushed.extend(values);
                prop_assert_eq!(heapified.into_sorted_vec(), pushed.into_sorted_vec());
            }

            /// Property: push_pop and replace_top agree with push/pop pairs
            #[cfg_attr(miri, ignore)]
            #[test]
            fn prop_fused_ops_match_plain_ops(
                values in prop::collection::vec(any::<i8>(), 1..64),
                incoming in any::<i8>()
            ) {
                let base: MaxHeap<i8> = values.into_iter().collect();

                let mut fused = base.clone();
                let mut plain = base.clone();
                plain.push(incoming);
                prop_assert_eq!(fused.push_pop(incoming), plain.pop().unwrap());
                prop_assert!(fused.check_invariants().is_ok());
                prop_assert_eq!(fused.into_sorted_vec(), plain.into_sorted_vec());

                let mut fused = base.clone();
                let mut plain = base;
                let expected = plain.pop().unwrap();
                plain.push(incoming);
                prop_assert_eq!(fused.replace_top(incoming), Ok(expected));
                prop_assert!(fused.check_invariants().is_ok());
                prop_assert_eq!(fused.into_sorted_vec(), plain.into_sorted_vec());
            }
        }
    }
}
