//! heapkit: an array-backed binary max-heap with a priority-queue contract.
//!
//! - [`ds::MaxHeap`]: the heap itself, ordered by a pluggable [`ds::Compare`]
//! - [`traits::PriorityQueue`]: the push / pop / peek contract
//! - [`builder::HeapBuilder`]: runtime choice of capacity and pop order
//! - [`error::EmptyHeapError`]: reported by `pop`/`peek` on an empty heap
//!
//! Enable the `metrics` feature for operation counters and a Prometheus text
//! exporter.

pub mod builder;
pub mod ds;
pub mod error;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod prelude;
pub mod traits;
