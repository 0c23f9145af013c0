//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check that derived values (season, calendar offset, origins) parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system
//! - Whether the default season has data is checked at startup, against
//!   the loaded store

use std::net::SocketAddr;

use axum::http::HeaderValue;
use chrono::FixedOffset;
use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::matches::Season;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: '{value}' is not a valid socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("observability.log_level: '{0}' is not one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("data.default_season: '{0}' is not a season year")]
    InvalidSeason(String),

    #[error("data.calendar_utc_offset: '{0}' is not an offset like +05:30")]
    InvalidOffset(String),

    #[error("security.cors_allowed_origins: '{0}' is not a valid origin (leave the list empty to allow any)")]
    InvalidOrigin(String),
}

pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if config.data.default_season.parse::<Season>().is_err() {
        errors.push(ValidationError::InvalidSeason(config.data.default_season.clone()));
    }

    if let Some(offset) = &config.data.calendar_utc_offset {
        if offset.parse::<FixedOffset>().is_err() {
            errors.push(ValidationError::InvalidOffset(offset.clone()));
        }
    }

    for origin in &config.security.cors_allowed_origins {
        let wildcard = origin.trim() == "*";
        if wildcard || origin.trim().is_empty() || HeaderValue::from_str(origin).is_err() {
            errors.push(ValidationError::InvalidOrigin(origin.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&AppConfig::default()), Ok(()));
    }

    #[test]
    fn test_reports_all_errors() {
        let mut config = AppConfig::default();
        config.listener.bind_address = "localhost".into();
        config.timeouts.request_secs = 0;
        config.observability.log_level = "loud".into();
        config.data.default_season = "latest".into();
        config.data.calendar_utc_offset = Some("IST".into());

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ValidationError::ZeroTimeout));
        assert!(errors.contains(&ValidationError::InvalidOffset("IST".into())));
        assert!(errors.contains(&ValidationError::InvalidSeason("latest".into())));
    }

    #[test]
    fn test_metrics_address_only_checked_when_enabled() {
        let mut config = AppConfig::default();
        config.observability.metrics_address = "nowhere".into();
        assert!(validate_config(&config).is_err());

        config.observability.metrics_enabled = false;
        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn test_accepts_offset_and_origins() {
        let mut config = AppConfig::default();
        config.data.calendar_utc_offset = Some("+05:30".into());
        config.security.cors_allowed_origins = vec!["https://ipl.example.com".into()];
        assert_eq!(validate_config(&config), Ok(()));

        config.security.cors_allowed_origins.push("bad\norigin".into());
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::InvalidOrigin("bad\norigin".into())])
        );
    }
}
