//! Operation counters for [`MaxHeap`](crate::ds::MaxHeap) (feature `metrics`).
//!
//! Recording, snapshotting and export are separate concerns: the heap writes
//! counters through [`traits::HeapMetricsRecorder`], tests and benches read
//! them through [`traits::MetricsSnapshotProvider`], and monitoring backends
//! receive them through [`traits::MetricsExporter`].

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
