//! HTTP request handlers for the Payroll Computation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    aggregate, compute_payroll, health_insurance, housing_fund, social_insurance, withholding_tax,
};
use crate::config::StatutoryConfig;
use crate::error::EngineResult;
use crate::models::{AttendanceRecord, DeductionBreakdown, Employee, PayPeriod};

use super::request::{DeductionsRequest, PayrollRequest};
use super::response::{ApiError, ApiErrorResponse, DeductionsResponse, PayrollResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll", post(payroll_handler))
        .route("/deductions", post(deductions_handler))
        .with_state(state)
}

/// Handler for the POST /payroll endpoint.
///
/// Aggregates the submitted attendance into period totals and computes the
/// payroll for the submitted employee.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking; doubles as the computation id.
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let employee: Employee = match request.employee.try_into() {
        Ok(employee) => employee,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected compensation profile");
            return error_response(err.into());
        }
    };
    let period: PayPeriod = request.period.into();
    let records: Vec<AttendanceRecord> =
        request.attendance.into_iter().map(Into::into).collect();

    let config = state.config().config();
    let totals = aggregate(&records, period, config.policy());

    match compute_payroll(&employee, &totals, config) {
        Ok(payroll) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %payroll.employee_id,
                records_count = records.len(),
                gross_pay = %payroll.gross_pay,
                net_pay = %payroll.net_pay,
                "Payroll computed successfully"
            );
            let response = PayrollResponse {
                computation_id: correlation_id,
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                payroll,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Payroll computation failed");
            error_response(err.into())
        }
    }
}

/// Handler for the POST /deductions endpoint.
///
/// Prices the four statutory deduction lines for a gross pay without
/// running a whole payroll, for display and audit of a single line.
async fn deductions_handler(
    State(state): State<AppState>,
    payload: Result<Json<DeductionsRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing deductions request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let config = state.config().config();
    let gross_pay = request.gross_pay;

    match price_deductions(gross_pay, config) {
        Ok(deductions) => {
            info!(
                correlation_id = %correlation_id,
                gross_pay = %gross_pay,
                total_deductions = %deductions.total,
                "Deductions priced successfully"
            );
            let response = DeductionsResponse {
                gross_pay,
                deductions,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Deductions pricing failed");
            error_response(err.into())
        }
    }
}

/// Prices the four deduction lines independently for a gross pay.
fn price_deductions(
    gross_pay: Decimal,
    config: &StatutoryConfig,
) -> EngineResult<DeductionBreakdown> {
    Ok(DeductionBreakdown::new(
        social_insurance(gross_pay, config.social_insurance())?,
        health_insurance(gross_pay, config.health_insurance())?,
        housing_fund(gross_pay, config.housing_fund())?,
        withholding_tax(gross_pay, config.withholding_tax())?,
    ))
}

/// Maps a JSON extraction rejection onto the API error contract.
fn json_rejection_response(
    correlation_id: Uuid,
    rejection: JsonRejection,
) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Serves an engine error with its mapped status code.
fn error_response(err: ApiErrorResponse) -> axum::response::Response {
    (
        err.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(err.error),
    )
        .into_response()
}
