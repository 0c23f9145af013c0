//! Route handlers, one module per API prefix.
//!
//! Handlers only parse path/query input, call [`MatchQuery`] and shape the
//! envelope; they hold no logic of their own.
//!
//! [`MatchQuery`]: crate::matches::MatchQuery

pub mod live;
pub mod points;
pub mod schedule;
pub mod service;
pub mod upcoming;
