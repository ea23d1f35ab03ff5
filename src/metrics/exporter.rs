use std::io::Write;
use std::sync::Mutex;

use crate::metrics::snapshot::HeapMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for heap metrics snapshots.
///
/// Writes the Prometheus text exposition format so the output can be scraped
/// by Prometheus or forwarded to an OpenTelemetry collector.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send + Sync> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send + Sync> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_metric(&self, kind: &str, name: &str, value: u64) {
        // A panic mid-export leaves at worst a partial line; keep exporting.
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, name: &str, value: u64) {
        self.write_metric("counter", name, value);
    }

    fn write_gauge(&self, name: &str, value: u64) {
        self.write_metric("gauge", name, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send + Sync> MetricsExporter<HeapMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &HeapMetricsSnapshot) {
        self.write_counter(&self.metric_name("push_calls_total"), snapshot.push_calls);
        self.write_counter(
            &self.metric_name("sift_up_swaps_total"),
            snapshot.sift_up_swaps,
        );
        self.write_counter(&self.metric_name("pop_calls_total"), snapshot.pop_calls);
        self.write_counter(&self.metric_name("pop_found_total"), snapshot.pop_found);
        self.write_counter(&self.metric_name("pop_empty_total"), snapshot.pop_empty);
        self.write_counter(
            &self.metric_name("sift_down_swaps_total"),
            snapshot.sift_down_swaps,
        );
        self.write_counter(&self.metric_name("peek_calls_total"), snapshot.peek_calls);
        self.write_counter(&self.metric_name("peek_found_total"), snapshot.peek_found);
        self.write_counter(&self.metric_name("clear_calls_total"), snapshot.clear_calls);
        self.write_counter(
            &self.metric_name("heapify_calls_total"),
            snapshot.heapify_calls,
        );
        self.write_counter(
            &self.metric_name("heapify_swaps_total"),
            snapshot.heapify_swaps,
        );

        self.write_gauge(&self.metric_name("len"), snapshot.len as u64);
        self.write_gauge(&self.metric_name("capacity"), snapshot.capacity as u64);
    }
}
