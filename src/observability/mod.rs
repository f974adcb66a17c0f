//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! retry invoker and upstream client produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (counters and gauges on the metrics facade)
//!
//! Consumers:
//!     → Log aggregation (stdout, file, remote)
//!     → Whatever recorder the embedding binary installs
//! ```
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Metrics are cheap (atomic increments) and recorded unconditionally;
//!   without an installed recorder they are no-ops

pub mod logging;
pub mod metrics;
