//! Retry subsystem.
//!
//! # Data Flow
//! ```text
//! Upstream query:
//!     → invoker.rs (run the operation)
//!     → On failure: backoff.rs (compute next delay), wait, re-attempt
//!     → cancel.rs (abort the wait if the caller gave up)
//! ```
//!
//! # Design Decisions
//! - Attempts are strictly sequential; never more than one in flight
//! - Backoff doubles every attempt, with no jitter and no upper bound
//! - Every failure is retried identically; no transient/permanent split
//! - Once the budget is spent, the last error surfaces unchanged

pub mod backoff;
pub mod cancel;
pub mod invoker;

pub use cancel::CancelToken;
pub use invoker::{retry_with_backoff, retry_with_backoff_until, RetryError};
