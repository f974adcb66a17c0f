//! Bounded retry invoker.
//!
//! # Responsibilities
//! - Drive a single upstream operation through a fixed attempt budget
//! - Sleep the exponential backoff schedule between failed attempts
//! - Surface the final failure unchanged once the budget is spent
//! - Abort backoff waits when the caller's cancel token fires
//!
//! # Design Decisions
//! - Explicit loop with an attempt counter, not recursion
//! - The operation is a typed capability: an `FnMut` producing a future
//! - Cancellation interrupts the waits between attempts; it never tears
//!   down an attempt already in flight

use std::fmt::Display;
use std::future::Future;

use thiserror::Error;
use tokio::time::sleep;

use crate::observability::metrics;
use crate::retry::backoff::calculate_backoff;
use crate::retry::cancel::CancelToken;

// Re-export RetryConfig from config module to avoid duplication
pub use crate::config::schema::RetryConfig;

/// Failure from a cancellable retry sequence.
#[derive(Debug, Error)]
pub enum RetryError<E> {
    /// The budget ran out; carries the error from the final attempt.
    #[error("{0}")]
    Upstream(E),

    /// The caller's cancel token fired while the sequence was waiting to
    /// re-attempt.
    #[error("retry sequence cancelled")]
    Cancelled,
}

impl<E> RetryError<E> {
    /// Unwrap the upstream error, if that is what ended the sequence.
    pub fn into_upstream(self) -> Option<E> {
        match self {
            RetryError::Upstream(err) => Some(err),
            RetryError::Cancelled => None,
        }
    }
}

/// Run `operation` until it succeeds or the attempt budget is spent.
///
/// The operation runs once immediately; each failure spends one unit of
/// budget and schedules a doubled delay before the next attempt. Once
/// `max_retries` re-attempts have failed, the error from the final attempt
/// is returned exactly as the operation produced it.
///
/// `max_retries = 0` means a single attempt and no delay.
pub async fn retry_with_backoff<T, E, F, Fut>(config: &RetryConfig, operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let detached = CancelToken::new();
    match retry_with_backoff_until(config, &detached, operation).await {
        Ok(value) => Ok(value),
        Err(RetryError::Upstream(err)) => Err(err),
        Err(RetryError::Cancelled) => unreachable!("no cancel handle escapes this scope"),
    }
}

/// Like [`retry_with_backoff`], but abortable.
///
/// The token is checked once before the first attempt and raced against
/// every backoff wait. An attempt already in flight is left to finish; its
/// outcome still spends budget as usual.
pub async fn retry_with_backoff_until<T, E, F, Fut>(
    config: &RetryConfig,
    cancel: &CancelToken,
    mut operation: F,
) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    if cancel.is_cancelled() {
        return Err(RetryError::Cancelled);
    }

    let mut attempt: u32 = 0;
    loop {
        match operation().await {
            Ok(value) => {
                metrics::record_attempt("success");
                if attempt > 0 {
                    tracing::debug!(
                        attempts = attempt + 1,
                        "upstream operation succeeded after retry"
                    );
                }
                return Ok(value);
            }
            Err(err) => {
                metrics::record_attempt("failure");
                if attempt >= config.max_retries {
                    metrics::record_budget_exhausted();
                    tracing::warn!(
                        attempts = attempt + 1,
                        error = %err,
                        "retry budget exhausted, surfacing last failure"
                    );
                    return Err(RetryError::Upstream(err));
                }

                let delay = calculate_backoff(attempt, config.initial_delay_ms);
                tracing::info!(
                    attempt = attempt + 1,
                    delay = ?delay,
                    error = %err,
                    "upstream operation failed, backing off"
                );
                metrics::record_retry_scheduled();

                tokio::select! {
                    _ = cancel.cancelled() => {
                        tracing::debug!(
                            attempt = attempt + 1,
                            "retry sequence cancelled during backoff"
                        );
                        return Err(RetryError::Cancelled);
                    }
                    _ = sleep(delay) => {}
                }

                attempt += 1;
            }
        }
    }
}
