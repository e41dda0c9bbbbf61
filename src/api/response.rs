//! Response types for the billing API.
//!
//! This module defines the statement response body, the error response
//! structures, and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::BillingError;
use crate::models::StatementData;

/// Response body for `POST /statement`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementResponse<'a> {
    /// Identifier of this statement, also used as the log correlation ID.
    pub statement_id: Uuid,
    /// When the statement was generated.
    pub generated_at: DateTime<Utc>,
    /// The computed statement data.
    pub statement: StatementData<'a>,
    /// The plain text rendering.
    pub text: String,
    /// The HTML rendering.
    pub html: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an unknown genre error response.
    pub fn unknown_genre(genre: &str) -> Self {
        Self::with_details(
            "UNKNOWN_GENRE",
            format!("Unknown genre: {}", genre),
            "Supported genres are tragedy, comedy and history",
        )
    }

    /// Creates a play not found error response.
    pub fn play_not_found(play_id: &str) -> Self {
        Self::with_details(
            "PLAY_NOT_FOUND",
            format!("Play not found: {}", play_id),
            format!("The play '{}' is not in the play catalog", play_id),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<BillingError> for ApiErrorResponse {
    fn from(error: BillingError) -> Self {
        match error {
            BillingError::UnknownGenre { genre } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::unknown_genre(&genre),
            },
            BillingError::PlayNotFound { play_id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::play_not_found(&play_id),
            },
            BillingError::DataNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "DATA_ERROR",
                    "Data error",
                    format!("Data file not found: {}", path),
                ),
            },
            BillingError::DataParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "DATA_ERROR",
                    "Data parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}
