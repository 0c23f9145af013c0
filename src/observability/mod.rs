//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Every request:
//!     → trace span (method, uri, request id) from the HTTP layer
//!     → logging.rs (structured log events, pretty or JSON)
//!     → metrics.rs (request counter and latency histogram)
//!
//! Consumers:
//!     → stdout (log aggregation)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Request ID flows into every log line of the request
//! - Metrics are cheap (atomic increments)

pub mod logging;
pub mod metrics;
