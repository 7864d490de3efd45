//! Response types for the Payroll Computation Engine API.
//!
//! This module defines the success envelopes and the error response
//! structures for the HTTP API.

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{DeductionBreakdown, PayrollResult};

/// Success envelope for the `/payroll` endpoint.
///
/// The payroll itself is deterministic; the envelope adds the per-request
/// identifiers the serving layer owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollResponse {
    /// Unique identifier for this computation run.
    pub computation_id: Uuid,
    /// When the computation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the computation.
    pub engine_version: String,
    /// The computed payroll.
    pub payroll: PayrollResult,
}

/// Success envelope for the `/deductions` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeductionsResponse {
    /// The gross pay the lines were priced for.
    pub gross_pay: Decimal,
    /// The four deduction lines and their sum.
    pub deductions: DeductionBreakdown,
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

    /// Creates a malformed JSON error response.
    pub fn malformed_json(details: impl Into<String>) -> Self {
        Self::with_details(
            "MALFORMED_JSON",
            "Request body is not valid JSON",
            details,
        )
    }
}

/// An API error paired with the HTTP status it should be served with.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl From<EngineError> for ApiErrorResponse {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Statutory configuration is unavailable",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParse { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Statutory configuration is unavailable",
                    format!("Failed to parse '{}': {}", path, message),
                ),
            },
            EngineError::InvalidTable { table, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INVALID_TABLE",
                    format!("Statutory table '{}' is malformed", table),
                    message,
                ),
            },
            EngineError::EmployeeNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "EMPLOYEE_NOT_FOUND",
                    format!("No such employee: {}", id),
                    "The employee identifier is not known to this engine",
                ),
            },
            EngineError::InvalidCompensation { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_COMPENSATION",
                    format!("Invalid compensation field '{}': {}", field, message),
                    "The compensation profile contains invalid information",
                ),
            },
            EngineError::InvalidHours { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_HOURS",
                    format!("Invalid period hours: {}", message),
                    "The period totals contain invalid information",
                ),
            },
            EngineError::InvalidGrossPay { amount } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_GROSS_PAY",
                    format!("Gross pay must be non-negative, got {}", amount),
                    "Contribution tables only accept non-negative gross pay",
                ),
            },
        }
    }
}
