//! HTTP request handlers for the Pay Annualization Engine API.
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

use crate::calculation::{INVALID_PERIOD, annualize, classify_pay_band, to_monthly};
use crate::error::EngineError;
use crate::models::{AnnualizationResult, AnnualizedRecord, PayRecord, RecordTotals};

use super::request::AnnualizationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/annualize", post(annualize_handler))
        .with_state(state)
}

/// Handler for POST /annualize endpoint.
///
/// Accepts a batch of pay records and returns the annualized, monthly, and
/// pay-band figures for each, in input order.
async fn annualize_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnnualizationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing annualization request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Resolve the unmatched-period sentinel: a per-request override wins
    // over the configured one, and must itself be a usable sentinel
    let default_unmatched = match request.default_unmatched {
        Some(value) if value >= Decimal::ZERO => {
            warn!(
                correlation_id = %correlation_id,
                value = %value,
                "Rejected non-negative sentinel override"
            );
            let api_error: ApiErrorResponse = EngineError::InvalidSentinel { value }.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
        Some(value) => value,
        None => state.settings().default_unmatched(),
    };

    // Convert request types to domain types
    let records: Vec<PayRecord> = request.records.into_iter().map(Into::into).collect();

    // Perform the annualization
    let result = perform_annualization(&records, default_unmatched);
    info!(
        correlation_id = %correlation_id,
        records = result.totals.records,
        annualized = result.totals.annualized,
        sentinels = result.totals.sentinels,
        "Annualization completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

/// Applies the engine to a batch of pay records.
///
/// Records are independent of each other: each is annualized, converted to
/// monthly off the annualized output, and banded. A record whose period is
/// invalid is banded off its estimated annual figure; with no estimate to
/// fall back on, it gets no band.
fn perform_annualization(records: &[PayRecord], default_unmatched: Decimal) -> AnnualizationResult {
    let results: Vec<AnnualizedRecord> = records
        .iter()
        .map(|record| {
            let annual_pay = annualize(record.value, record.period, default_unmatched);
            let monthly_pay = to_monthly(annual_pay);
            let pay_band = match record.estimated_annual {
                Some(estimate) => classify_pay_band(annual_pay, estimate),
                None if annual_pay == INVALID_PERIOD => None,
                None => classify_pay_band(annual_pay, Decimal::ZERO),
            };

            AnnualizedRecord {
                annual_pay,
                monthly_pay,
                pay_band,
            }
        })
        .collect();

    let totals = RecordTotals::from_results(&results);

    AnnualizationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        results,
        totals,
    }
}
