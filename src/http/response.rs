//! Response envelopes.
//!
//! # Responsibilities
//! - Wrap successful payloads as `{success: true, data, message, note?}`
//! - Map [`ApiError`] variants to status codes and the
//!   `{success: false, error, message}` body
//!
//! # Design Decisions
//! - `error` is a short, stable label clients can switch on; `message` is
//!   the human-readable detail
//! - Client errors log at debug, server errors at error
//! - Extractor rejections and bare status responses from the middleware
//!   stack are folded into [`ApiError`] so no failure leaves without a body

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::matches::types::{MatchStatus, TeamCode};

/// Successful response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(rename = "nextMatch", skip_serializing_if = "Option::is_none")]
    pub next_match: Option<NextMatchHint>,
}

/// Where to look for the next game when nothing is live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextMatchHint {
    pub message: &'static str,
    pub endpoint: &'static str,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: Some(message.into()),
            note: None,
            next_match: None,
        }
    }

    /// Envelope without a message.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
            note: None,
            next_match: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_next_match(mut self, hint: NextMatchHint) -> Self {
        self.next_match = Some(hint);
        self
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Error body sent for every failed request.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: &'static str,
    pub message: String,
}

/// Everything a handler can fail with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Status must be one of: {}", MatchStatus::ALL.map(MatchStatus::as_str).join(", "))]
    InvalidStatus(String),

    #[error("Team code must be one of: {}", TeamCode::listing())]
    InvalidTeamCode(String),

    #[error("Please provide a venue name")]
    MissingVenue,

    #[error("Count must be a positive number")]
    InvalidCount(String),

    #[error("No match found with ID: {0}")]
    MatchNotFound(String),

    #[error("No data available for IPL {0}")]
    SeasonNotFound(String),

    #[error("No route matches {0}")]
    RouteNotFound(String),

    /// Path or query string that could not be decoded.
    #[error("{0}")]
    InvalidInput(String),

    #[error("Method {0} is not allowed on this route")]
    MethodNotAllowed(String),

    #[error("Request did not complete within the configured timeout")]
    Timeout,

    /// Any other status produced by middleware without a body.
    #[error("Request failed with status {0}")]
    Status(StatusCode),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidStatus(_)
            | ApiError::InvalidTeamCode(_)
            | ApiError::MissingVenue
            | ApiError::InvalidCount(_)
            | ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::MatchNotFound(_)
            | ApiError::SeasonNotFound(_)
            | ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ApiError::Status(status) => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApiError::InvalidStatus(_) => "Invalid status",
            ApiError::InvalidTeamCode(_) => "Invalid team code",
            ApiError::MissingVenue => "Venue parameter required",
            ApiError::InvalidCount(_) => "Invalid count parameter",
            ApiError::MatchNotFound(_) => "Match not found",
            ApiError::SeasonNotFound(_) => "Season not found",
            ApiError::RouteNotFound(_) => "Route not found",
            ApiError::InvalidInput(_) => "Invalid request",
            ApiError::MethodNotAllowed(_) => "Method not allowed",
            ApiError::Timeout => "Request timeout",
            ApiError::Status(status) => status.canonical_reason().unwrap_or("Request failed"),
            ApiError::Internal(_) => "Internal server error",
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            success: false,
            error: self.label(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        (status, Json(self.body())).into_response()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        if rejection.status().is_server_error() {
            ApiError::Internal(rejection.body_text())
        } else {
            ApiError::InvalidInput(rejection.body_text())
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::InvalidStatus("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidTeamCode("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MissingVenue.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidCount("0".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MatchNotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::SeasonNotFound("1999".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::RouteNotFound("/x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_body_shape() {
        let body = serde_json::to_value(ApiError::SeasonNotFound("2019".into()).body()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "success": false,
                "error": "Season not found",
                "message": "No data available for IPL 2019",
            })
        );
    }

    #[test]
    fn test_messages_list_valid_values() {
        assert_eq!(
            ApiError::InvalidStatus("done".into()).to_string(),
            "Status must be one of: live, upcoming, completed"
        );
        assert_eq!(
            ApiError::InvalidTeamCode("XYZ".into()).to_string(),
            "Team code must be one of: MI, CSK, RCB, KKR, SRH, DC, RR, PBKS, GT, LSG"
        );
    }

    #[test]
    fn test_internal_echoes_message() {
        let body = ApiError::Internal("table missing".into()).body();
        assert_eq!(body.error, "Internal server error");
        assert_eq!(body.message, "table missing");
    }

    #[test]
    fn test_middleware_statuses() {
        assert_eq!(ApiError::Timeout.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(ApiError::Timeout.label(), "Request timeout");

        let body = ApiError::MethodNotAllowed("POST".into()).body();
        assert_eq!(body.error, "Method not allowed");
        assert_eq!(body.message, "Method POST is not allowed on this route");

        let error = ApiError::Status(StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(error.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(error.label(), "Payload Too Large");
    }

    #[test]
    fn test_next_match_hint_serializes_as_object() {
        let hint = NextMatchHint {
            message: "Check upcoming matches for the next game",
            endpoint: "/api/upcoming-matches",
        };
        let value = serde_json::to_value(ApiResponse::data(Option::<u8>::None).with_next_match(hint)).unwrap();
        assert_eq!(
            value["nextMatch"],
            serde_json::json!({
                "message": "Check upcoming matches for the next game",
                "endpoint": "/api/upcoming-matches",
            })
        );
    }

    #[test]
    fn test_success_envelope_skips_empty_note() {
        let value = serde_json::to_value(ApiResponse::ok(1, "done")).unwrap();
        assert_eq!(value, serde_json::json!({"success": true, "data": 1, "message": "done"}));
        assert!(value.get("nextMatch").is_none());

        let value = serde_json::to_value(ApiResponse::data(Option::<u8>::None).with_note("n")).unwrap();
        assert_eq!(value, serde_json::json!({"success": true, "data": null, "note": "n"}));
    }
}
