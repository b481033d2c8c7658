//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and intake stages produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every log line via the trace span
//! - Metrics are cheap (no-op without a recorder)

pub mod logging;
pub mod metrics;
