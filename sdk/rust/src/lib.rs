//! Typed client for the IPL match-data API.
//!
//! ```no_run
//! # async fn demo() -> Result<(), livematch_sdk::SdkError> {
//! let client = livematch_sdk::LiveMatchClient::new("http://localhost:5000");
//! if let Some(live) = client.live_match().await? {
//!     println!("{} v {}", live.teams.home.code, live.teams.away.code);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::{LiveMatchClient, SdkError};
pub use types::*;
