//! Exponential backoff schedule.

use std::time::Duration;

/// Delay to wait before re-attempt number `retry` (0-indexed).
///
/// The schedule is strictly exponential with multiplier 2 and no jitter:
/// `initial_delay_ms, 2 * initial_delay_ms, 4 * initial_delay_ms, ...`.
/// There is no upper bound; arithmetic saturates at `u64::MAX` milliseconds.
pub fn calculate_backoff(retry: u32, initial_delay_ms: u64) -> Duration {
    let exponential = 2u64.saturating_pow(retry);
    Duration::from_millis(initial_delay_ms.saturating_mul(exponential))
}
