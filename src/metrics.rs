// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Metrics instrumentation for the record store.
//!
//! Uses the `metrics` crate for backend-agnostic metrics collection.
//! The embedding process is responsible for choosing the exporter
//! (Prometheus, OTEL, etc.)
//!
//! # Metric Naming Convention
//! - `record_store_` prefix for all metrics
//! - `_total` suffix for counters
//! - `_seconds` suffix for duration histograms
//!
//! # Labels
//! - `operation`: create, get, list, update, delete
//! - `status`: success, not_found, duplicate, backend_error
//! - `cache`: record, page

use metrics::{counter, gauge, histogram};
use std::time::{Duration, Instant};

/// Record a completed operation with its outcome
pub fn record_operation(operation: &str, status: &str) {
    counter!(
        "record_store_operations_total",
        "operation" => operation.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record operation latency
pub fn record_latency(operation: &str, duration: Duration) {
    histogram!(
        "record_store_operation_seconds",
        "operation" => operation.to_string()
    )
    .record(duration.as_secs_f64());
}

/// Record a cache lookup outcome (`hit` / `miss`)
pub fn record_cache_access(cache: &str, outcome: &str) {
    counter!(
        "record_store_cache_accesses_total",
        "cache" => cache.to_string(),
        "outcome" => outcome.to_string()
    )
    .increment(1);
}

/// Record a whole-cache invalidation of the page cache
pub fn record_page_cache_invalidation() {
    counter!("record_store_page_cache_invalidations_total").increment(1);
}

/// Set current live record count
pub fn set_record_count(count: u64) {
    gauge!("record_store_records").set(count as f64);
}

/// Set current cache entry count
pub fn set_cache_entries(cache: &str, count: usize) {
    gauge!(
        "record_store_cache_entries",
        "cache" => cache.to_string()
    )
    .set(count as f64);
}

/// RAII timer that records operation latency on drop
pub struct LatencyTimer {
    operation: &'static str,
    start: Instant,
}

impl LatencyTimer {
    /// Start a new latency timer
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            start: Instant::now(),
        }
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        record_latency(self.operation, self.start.elapsed());
    }
}
