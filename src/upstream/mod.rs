//! Upstream user-directory integration.
//!
//! # Data Flow
//! ```text
//! caller
//!     → client.rs (build request, bearer auth, per-call deadline)
//!     → directory service (JSON over HTTP)
//!     → types.rs (decode response, map failures)
//!
//! With retry:
//!     client.rs hands the single-attempt query to the retry invoker
//! ```
//!
//! # Design Decisions
//! - Every call has a deadline; a hung upstream surfaces as Timeout
//! - The client never retries on its own; retry policy is explicit
//! - Failures map to one taxonomy regardless of transport detail

pub mod client;
pub mod types;

pub use client::DirectoryClient;
pub use types::{QueryUsersResponse, UpstreamError, UpstreamResult, UserQuery, UserRecord};
