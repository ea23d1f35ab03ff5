//! Ordering strategies for [`MaxHeap`](crate::ds::MaxHeap).
//!
//! The heap never compares elements directly; every comparison goes through a
//! [`Compare`] implementation. "Greater" under the comparator means "closer to
//! the root", so swapping the comparator changes which element is popped first
//! without touching the sift algorithms.
//!
//! | Comparator      | Root holds          | Element bound |
//! |-----------------|---------------------|---------------|
//! | [`Natural`]     | largest by `Ord`    | `T: Ord`      |
//! | [`MinFirst`]    | smallest by `Ord`   | `T: Ord`      |
//! | [`FnCompare`]   | largest by closure  | any `T`       |
//!
//! ## Example Usage
//!
//! ```
//! use heapkit::ds::{FnCompare, MaxHeap};
//!
//! // Highest priority first, ties broken by the shorter name.
//! let by_priority = FnCompare::new(|a: &(u8, &str), b: &(u8, &str)| {
//!     a.0.cmp(&b.0).then_with(|| b.1.len().cmp(&a.1.len()))
//! });
//! let mut jobs = MaxHeap::with_comparator(by_priority);
//! jobs.push((1, "compact"));
//! jobs.push((3, "flush"));
//! jobs.push((3, "checkpoint"));
//!
//! assert_eq!(jobs.pop(), Ok((3, "flush")));
//! assert_eq!(jobs.pop(), Ok((3, "checkpoint")));
//! assert_eq!(jobs.pop(), Ok((1, "compact")));
//! ```

use std::cmp::Ordering;
use std::fmt;

/// Total order used by the heap to decide which element sits closer to the root.
///
/// Implementations must be a total order over the values they are used with;
/// the heap's invariants are only as good as the comparator's consistency.
pub trait Compare<T: ?Sized> {
    /// Compares `a` with `b`. `Greater` means `a` has higher priority.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns `true` if `a` has strictly higher priority than `b`.
    #[inline]
    fn gt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }
}

/// Natural `Ord` order: the largest element is popped first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Reversed `Ord` order: the smallest element is popped first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MinFirst;

impl<T: Ord + ?Sized> Compare<T> for MinFirst {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Comparator backed by a closure.
///
/// Useful for non-numeric priorities or for ordering by a projection of the
/// element (e.g. a deadline field).
#[derive(Clone, Copy)]
pub struct FnCompare<F>(F);

impl<F> FnCompare<F> {
    /// Wraps `f` as a comparator.
    pub fn new(f: F) -> Self {
        Self(f)
    }

    /// Returns the wrapped closure.
    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<F> fmt::Debug for FnCompare<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCompare").finish_non_exhaustive()
    }
}

impl<T: ?Sized, F> Compare<T> for FnCompare<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

impl<T: ?Sized, C: Compare<T> + ?Sized> Compare<T> for &C {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}
