//! IPL match-data API.
//!
//! Serves match schedules, live-match details, upcoming fixtures and
//! season points tables over HTTP as JSON envelopes.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server (request id, trace, timeout, CORS, metrics)
//!                         │
//!                         ▼
//!                     http::handlers ──▶ matches::MatchQuery ──▶ matches::MatchStore
//!                         │                                          ▲
//!                         ▼                                          │
//!     ◀────────────── http::response                              data (literal tables)
//!     Client Response
//!
//!     Cross-cutting: config, observability, security, lifecycle
//! ```

pub mod config;
pub mod data;
pub mod http;
pub mod lifecycle;
pub mod matches;
pub mod observability;
pub mod security;

pub use config::schema::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
