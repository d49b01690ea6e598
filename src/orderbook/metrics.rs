//! Operation counters and latency samples for the book's hot paths.

use std::fmt::Write;

const SAMPLE_CAPACITY: usize = 100_000;

/// Metrics collected by the book: operation counters plus per-operation
/// latency samples in nanoseconds.
///
/// Recording happens on every exit path of every public operation,
/// including rejected submissions and cancels of unknown ids. The book is
/// single-writer, so plain fields suffice; readers see a consistent view
/// between operations.
#[derive(Debug)]
pub struct Metrics {
    total_orders: u64,
    total_cancels: u64,
    total_matches: u64,
    total_volume_traded: u64,

    add_latencies: Vec<u64>,
    cancel_latencies: Vec<u64>,
    match_latencies: Vec<u64>,
}

impl Metrics {
    pub(super) fn new() -> Self {
        Self {
            total_orders: 0,
            total_cancels: 0,
            total_matches: 0,
            total_volume_traded: 0,
            add_latencies: Vec::with_capacity(SAMPLE_CAPACITY),
            cancel_latencies: Vec::with_capacity(SAMPLE_CAPACITY),
            match_latencies: Vec::with_capacity(SAMPLE_CAPACITY),
        }
    }

    pub(super) fn record_add(&mut self, latency_ns: u64) {
        self.total_orders += 1;
        self.add_latencies.push(latency_ns);
    }

    pub(super) fn record_cancel(&mut self, latency_ns: u64) {
        self.total_cancels += 1;
        self.cancel_latencies.push(latency_ns);
    }

    pub(super) fn record_match(&mut self, latency_ns: u64, volume: u64) {
        self.total_matches += 1;
        self.total_volume_traded += volume;
        self.match_latencies.push(latency_ns);
    }

    /// Number of submissions processed (limit and market, including rejects).
    pub fn total_orders(&self) -> u64 {
        self.total_orders
    }

    /// Number of cancel requests processed.
    pub fn total_cancels(&self) -> u64 {
        self.total_cancels
    }

    /// Number of matching passes that produced at least one fill.
    pub fn total_matches(&self) -> u64 {
        self.total_matches
    }

    /// Total quantity traded across all matches.
    pub fn total_volume_traded(&self) -> u64 {
        self.total_volume_traded
    }

    /// Latency percentile over recorded add samples, in nanoseconds.
    pub fn add_latency_percentile(&self, percentile: f64) -> u64 {
        Self::percentile(&self.add_latencies, percentile)
    }

    /// Latency percentile over recorded cancel samples, in nanoseconds.
    pub fn cancel_latency_percentile(&self, percentile: f64) -> u64 {
        Self::percentile(&self.cancel_latencies, percentile)
    }

    /// Latency percentile over recorded match samples, in nanoseconds.
    pub fn match_latency_percentile(&self, percentile: f64) -> u64 {
        Self::percentile(&self.match_latencies, percentile)
    }

    /// Mean add latency in nanoseconds.
    pub fn avg_add_latency(&self) -> f64 {
        Self::average(&self.add_latencies)
    }

    /// Mean cancel latency in nanoseconds.
    pub fn avg_cancel_latency(&self) -> f64 {
        Self::average(&self.cancel_latencies)
    }

    /// Mean match latency in nanoseconds.
    pub fn avg_match_latency(&self) -> f64 {
        Self::average(&self.match_latencies)
    }

    /// Clear all counters and samples.
    pub fn reset(&mut self) {
        self.total_orders = 0;
        self.total_cancels = 0;
        self.total_matches = 0;
        self.total_volume_traded = 0;
        self.add_latencies.clear();
        self.cancel_latencies.clear();
        self.match_latencies.clear();
    }

    /// Human-readable summary of counters and latency percentiles.
    pub fn summary(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "\n=== Order Book Metrics ===\n");
        let _ = writeln!(out, "Operations:");
        let _ = writeln!(out, "  Total Orders Added: {}", self.total_orders);
        let _ = writeln!(out, "  Total Cancellations: {}", self.total_cancels);
        let _ = writeln!(out, "  Total Matches: {}", self.total_matches);
        let _ = writeln!(out, "  Total Volume Traded: {}\n", self.total_volume_traded);

        Self::write_latency_section(&mut out, "Add Order", &self.add_latencies);
        Self::write_latency_section(&mut out, "Cancel Order", &self.cancel_latencies);
        Self::write_latency_section(&mut out, "Match Order", &self.match_latencies);

        let _ = writeln!(out, "==========================");
        out
    }

    fn write_latency_section(out: &mut String, label: &str, data: &[u64]) {
        if data.is_empty() {
            return;
        }
        let _ = writeln!(out, "{} Latency (nanoseconds):", label);
        let _ = writeln!(out, "  Average: {:.2} ns", Self::average(data));
        let _ = writeln!(out, "  P50: {} ns", Self::percentile(data, 50.0));
        let _ = writeln!(out, "  P95: {} ns", Self::percentile(data, 95.0));
        let _ = writeln!(out, "  P99: {} ns", Self::percentile(data, 99.0));
        let _ = writeln!(out, "  Max: {} ns\n", Self::percentile(data, 100.0));
    }

    fn percentile(data: &[u64], percentile: f64) -> u64 {
        if data.is_empty() {
            return 0;
        }

        let mut sorted = data.to_vec();
        sorted.sort_unstable();

        let mut index = ((percentile / 100.0) * sorted.len() as f64) as usize;
        if index >= sorted.len() {
            index = sorted.len() - 1;
        }
        sorted[index]
    }

    fn average(data: &[u64]) -> f64 {
        if data.is_empty() {
            return 0.0;
        }
        let sum: u64 = data.iter().sum();
        sum as f64 / data.len() as f64
    }
}
