//! Startup orchestration.
//!
//! # Responsibilities
//! - Turn a validated config into the running pieces: store, query layer
//! - Report every startup failure through one error type
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order: config, logging, metrics, store, bind
//! - Listeners start last (traffic only when ready)

use std::io;
use std::sync::Arc;

use chrono::FixedOffset;
use thiserror::Error;

use crate::config::{AppConfig, ConfigError};
use crate::matches::{MatchQuery, MatchStore, Season, StoreError};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("logging: {0}")]
    Logging(String),

    #[error("metrics: {0}")]
    Metrics(String),

    #[error("match data: {0}")]
    Store(#[from] StoreError),

    #[error("default season {0} has no points table")]
    UnknownDefaultSeason(Season),

    #[error("{field}: '{value}' is invalid")]
    InvalidSetting { field: &'static str, value: String },

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },
}

/// Build the query layer over `store` as configured.
///
/// Checks that the default season exists in the store.
pub fn build_query(
    config: &AppConfig,
    store: Arc<dyn MatchStore>,
) -> Result<(MatchQuery, Season), StartupError> {
    let default_season: Season =
        config
            .data
            .default_season
            .parse()
            .map_err(|_| StartupError::InvalidSetting {
                field: "data.default_season",
                value: config.data.default_season.clone(),
            })?;

    let mut query = MatchQuery::new(store);
    if let Some(raw) = &config.data.calendar_utc_offset {
        let offset: FixedOffset = raw.parse().map_err(|_| StartupError::InvalidSetting {
            field: "data.calendar_utc_offset",
            value: raw.clone(),
        })?;
        query = query.with_calendar(offset);
    }

    if !query.has_season(default_season) {
        return Err(StartupError::UnknownDefaultSeason(default_season));
    }

    tracing::debug!(
        default_season = %default_season,
        calendar = %query.calendar(),
        "Match query layer ready"
    );
    Ok((query, default_season))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matches::StaticStore;

    fn store() -> Arc<dyn MatchStore> {
        Arc::new(StaticStore::builtin().unwrap())
    }

    #[test]
    fn test_defaults_build() {
        let (query, season) = build_query(&AppConfig::default(), store()).unwrap();
        assert_eq!(season, Season(2025));
        assert_eq!(query.all_matches().len(), 20);
    }

    #[test]
    fn test_calendar_offset_applied() {
        let mut config = AppConfig::default();
        config.data.calendar_utc_offset = Some("+05:30".into());
        let (query, _) = build_query(&config, store()).unwrap();
        assert_eq!(query.calendar().local_minus_utc(), 5 * 3600 + 30 * 60);
    }

    #[test]
    fn test_default_season_without_data() {
        let mut config = AppConfig::default();
        config.data.default_season = "2019".into();
        let err = build_query(&config, store()).err().unwrap();
        assert!(matches!(err, StartupError::UnknownDefaultSeason(Season(2019))));
    }
}
