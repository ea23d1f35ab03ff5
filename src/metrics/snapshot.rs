/// Point-in-time copy of a heap's counters and gauges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeapMetricsSnapshot {
    pub push_calls: u64,
    pub sift_up_swaps: u64,

    pub pop_calls: u64,
    pub pop_found: u64,
    pub pop_empty: u64,
    pub sift_down_swaps: u64,

    pub peek_calls: u64,
    pub peek_found: u64,

    pub clear_calls: u64,
    pub heapify_calls: u64,
    pub heapify_swaps: u64,

    // gauges captured at snapshot time
    pub len: usize,
    pub capacity: usize,
}

impl HeapMetricsSnapshot {
    /// Average sift-up swaps per push; 0.0 when nothing was pushed.
    pub fn avg_sift_up_swaps(&self) -> f64 {
        if self.push_calls == 0 {
            0.0
        } else {
            self.sift_up_swaps as f64 / self.push_calls as f64
        }
    }

    /// Average sift-down swaps per successful pop; 0.0 when nothing was popped.
    pub fn avg_sift_down_swaps(&self) -> f64 {
        if self.pop_found == 0 {
            0.0
        } else {
            self.sift_down_swaps as f64 / self.pop_found as f64
        }
    }
}
