//! Error types for the heapkit library.
//!
//! ## Key Components
//!
//! - [`EmptyHeapError`]: Returned by [`MaxHeap::pop`](crate::ds::MaxHeap::pop),
//!   [`MaxHeap::peek`](crate::ds::MaxHeap::peek) and
//!   [`MaxHeap::replace_top`](crate::ds::MaxHeap::replace_top) when the heap
//!   holds no elements.
//! - [`InvariantError`]: Returned when the max-heap property is violated
//!   (`check_invariants` methods).
//!
//! ## Example Usage
//!
//! ```
//! use heapkit::ds::MaxHeap;
//! use heapkit::error::EmptyHeapError;
//!
//! let mut heap: MaxHeap<u32> = MaxHeap::new();
//! assert_eq!(heap.pop(), Err(EmptyHeapError));
//!
//! heap.push(7);
//! assert_eq!(heap.pop(), Ok(7));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// EmptyHeapError
// ---------------------------------------------------------------------------

/// Error returned when an operation needs an element but the heap is empty.
///
/// The condition is checked atomically at call time and leaves the heap
/// untouched, so callers can recover locally (e.g. by pushing and retrying).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyHeapError;

impl fmt::Display for EmptyHeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("heap is empty")
    }
}

impl std::error::Error for EmptyHeapError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal heap invariants are violated.
///
/// Produced by [`MaxHeap::check_invariants`](crate::ds::MaxHeap::check_invariants).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- EmptyHeapError ---------------------------------------------------

    #[test]
    fn empty_display_is_stable() {
        assert_eq!(EmptyHeapError.to_string(), "heap is empty");
    }

    #[test]
    fn empty_is_copy_and_eq() {
        let a = EmptyHeapError;
        let b = a;
        assert_eq!(a, b);
    }

    #[test]
    fn empty_implements_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<EmptyHeapError>();
    }

    #[test]
    fn empty_boxes_into_dyn_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(EmptyHeapError);
        assert_eq!(boxed.to_string(), "heap is empty");
    }

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("heap[1] > heap[0]");
        assert_eq!(err.to_string(), "heap[1] > heap[0]");
    }

    #[test]
    fn invariant_debug_includes_message() {
        let err = InvariantError::new("parent smaller than child");
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("parent smaller than child"));
    }

    #[test]
    fn invariant_message_accessor() {
        let err = InvariantError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn invariant_clone_and_eq() {
        let a = InvariantError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn invariant_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<InvariantError>();
    }
}
