//! Metrics collection.
//!
//! # Metrics
//! - `upstream_attempts_total` (counter): operation attempts by outcome
//! - `upstream_retries_total` (counter): backoff waits scheduled
//! - `upstream_retry_exhaustion_total` (counter): budgets spent without success
//! - `upstream_backend_health` (gauge): 1=healthy, 0=unhealthy
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Recorded against the metrics facade; the embedding binary chooses the
//!   exporter

use metrics::{counter, gauge};

/// Record one attempt of the wrapped operation.
pub fn record_attempt(outcome: &'static str) {
    counter!("upstream_attempts_total", "outcome" => outcome).increment(1);
}

/// Record that a backoff wait was scheduled before a re-attempt.
pub fn record_retry_scheduled() {
    counter!("upstream_retries_total").increment(1);
}

/// Record a retry budget spent without success.
pub fn record_budget_exhausted() {
    counter!("upstream_retry_exhaustion_total").increment(1);
}

/// Record backend health (1 = healthy, 0 = unhealthy).
pub fn record_backend_health(backend: &'static str, healthy: bool) {
    let value = if healthy { 1.0 } else { 0.0 };
    gauge!("upstream_backend_health", "backend" => backend).set(value);
}
