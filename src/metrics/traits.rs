//! # Metrics Trait Hierarchy
//!
//! Separates *recording*, *snapshotting*, and *export* into small traits so
//! monitoring and bench/testing stay decoupled from the sift algorithms.
//!
//! ```text
//!   ┌──────────────────────────────┐   ┌──────────────────────────────┐
//!   │     HeapMetricsRecorder      │   │   HeapMetricsReadRecorder    │
//!   │  push / pop / sift swaps     │   │  peek (&self, via cells)     │
//!   └──────────────┬───────────────┘   └──────────────┬───────────────┘
//!                  └────────────────┬─────────────────┘
//!                                   ▼
//!                          ┌─────────────────┐
//!                          │   HeapMetrics   │
//!                          └────────┬────────┘
//!                                   │
//!   Consumption (decoupled from recording):
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```

/// Counters written by mutating heap operations.
pub trait HeapMetricsRecorder {
    fn record_push(&mut self);
    fn record_sift_up_swap(&mut self);
    fn record_pop_call(&mut self);
    fn record_pop_found(&mut self);
    fn record_pop_empty(&mut self);
    fn record_sift_down_swaps(&mut self, swaps: u64);
    fn record_clear(&mut self);
    fn record_heapify(&mut self);
    /// Swaps made while building from an unordered vector; kept apart from
    /// `record_sift_down_swaps` so per-pop averages stay meaningful.
    fn record_heapify_swaps(&mut self, swaps: u64);
}

/// Counters written by `&self` operations (uses interior mutability).
pub trait HeapMetricsReadRecorder {
    fn record_peek_call(&self);
    fn record_peek_found(&self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&mut self);
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
