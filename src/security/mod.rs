//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Outgoing response:
//!     → headers.rs (CORS, hardening headers)
//!     → Send to client
//! ```
//!
//! # Design Decisions
//! - The API is read-only: CORS allows GET, HEAD and OPTIONS only
//! - Hardening headers can be disabled when a fronting proxy sets them

pub mod headers;

pub use headers::{cors_layer, with_security_headers};
