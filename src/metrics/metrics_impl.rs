use crate::metrics::cell::MetricsCell;
use crate::metrics::snapshot::HeapMetricsSnapshot;
use crate::metrics::traits::{HeapMetricsReadRecorder, HeapMetricsRecorder};

#[derive(Debug, Default, Clone)]
pub struct HeapMetrics {
    pub push_calls: u64,
    pub sift_up_swaps: u64,
    pub pop_calls: u64,
    pub pop_found: u64,
    pub pop_empty: u64,
    pub sift_down_swaps: u64,
    pub clear_calls: u64,
    pub heapify_calls: u64,
    pub heapify_swaps: u64,
    pub peek_calls: MetricsCell,
    pub peek_found: MetricsCell,
}

impl HeapMetrics {
    pub fn snapshot(&self, len: usize, capacity: usize) -> HeapMetricsSnapshot {
        HeapMetricsSnapshot {
            push_calls: self.push_calls,
            sift_up_swaps: self.sift_up_swaps,
            pop_calls: self.pop_calls,
            pop_found: self.pop_found,
            pop_empty: self.pop_empty,
            sift_down_swaps: self.sift_down_swaps,
            peek_calls: self.peek_calls.get(),
            peek_found: self.peek_found.get(),
            clear_calls: self.clear_calls,
            heapify_calls: self.heapify_calls,
            heapify_swaps: self.heapify_swaps,
            len,
            capacity,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl HeapMetricsRecorder for HeapMetrics {
    fn record_push(&mut self) {
        self.push_calls += 1;
    }

    fn record_sift_up_swap(&mut self) {
        self.sift_up_swaps += 1;
    }

    fn record_pop_call(&mut self) {
        self.pop_calls += 1;
    }

    fn record_pop_found(&mut self) {
        self.pop_found += 1;
    }

    fn record_pop_empty(&mut self) {
        self.pop_empty += 1;
    }

    fn record_sift_down_swaps(&mut self, swaps: u64) {
        self.sift_down_swaps += swaps;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }

    fn record_heapify(&mut self) {
        self.heapify_calls += 1;
    }

    fn record_heapify_swaps(&mut self, swaps: u64) {
        self.heapify_swaps += swaps;
    }
}

impl HeapMetricsReadRecorder for HeapMetrics {
    fn record_peek_call(&self) {
        self.peek_calls.incr();
    }

    fn record_peek_found(&self) {
        self.peek_found.incr();
    }
}
