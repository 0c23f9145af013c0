//! Match data subsystem.
//!
//! # Data Flow
//! ```text
//! data/ literal rows
//!     → store.rs (convert, validate invariants, expose via MatchStore)
//!     → query.rs (pure lookups and filters, owned copies out)
//!     → http handlers (envelope shaping)
//!
//! simulate.rs derives a throwaway live update from query.rs output.
//! ```

pub mod query;
pub mod search;
pub mod simulate;
pub mod store;
pub mod types;

pub use query::MatchQuery;
pub use search::SearchCriteria;
pub use store::{MatchStore, SeasonTable, StaticStore, StoreError};
pub use types::{Match, MatchStatus, Season, TeamCode, TeamStanding};
