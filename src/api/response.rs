//! Response types for the ZIP Code Eligibility Engine API.
//!
//! This module defines the search response structure along with the error
//! response structures and error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{Job, StateCode};

/// Successful response from the `/search` endpoint.
///
/// Jobs arrive already filtered for eligibility and ranked for display
/// (featured first, then alphabetical by title).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The ZIP code that was searched.
    pub zip_code: String,
    /// The state the ZIP code resolved to, or `"unknown"` when no declared
    /// range contains it.
    pub state: String,
    /// Number of jobs in the result.
    pub total: usize,
    /// The eligible jobs, in display order.
    pub jobs: Vec<Job>,
}

impl SearchResponse {
    /// Renders a resolved state for the response envelope.
    ///
    /// The engine-internal unresolved sentinel is the empty string; the
    /// wire format spells it `"unknown"` so clients never see an empty
    /// state field.
    pub fn state_label(state: &StateCode) -> String {
        if state.is_unresolved() {
            "unknown".to_string()
        } else {
            state.as_str().to_string()
        }
    }
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

    /// Creates an invalid ZIP code error response.
    pub fn invalid_zip_code(input: &str) -> Self {
        Self::with_details(
            "VALIDATION_ERROR",
            format!("Invalid ZIP code: {}", input),
            "ZIP codes must be exactly five ASCII digits",
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
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

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::JobDataNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "JOB_DATA_ERROR",
                    "Job data error",
                    format!("Job data file not found: {}", path),
                ),
            },
            EngineError::JobDataParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "JOB_DATA_ERROR",
                    "Job data parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidZipCode { input } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_zip_code(&input),
            },
            EngineError::UnknownCorridor { rule, corridor } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!(
                        "Closed region rule '{}' references unknown corridor '{}'",
                        rule, corridor
                    ),
                ),
            },
        }
    }
}
