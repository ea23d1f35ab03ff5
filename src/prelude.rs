pub use crate::builder::{HeapBuilder, HeapOrder};
pub use crate::ds::{Compare, FnCompare, MaxHeap, MinFirst, MinHeap, Natural};
pub use crate::error::{EmptyHeapError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::HeapMetricsSnapshot;
#[cfg(feature = "metrics")]
pub use crate::metrics::traits::{MetricsExporter, MetricsReset, MetricsSnapshotProvider};
pub use crate::traits::PriorityQueue;
