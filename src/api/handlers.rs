//! HTTP request handlers for the payout report API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::error::{ReportError, ReportResult};
use crate::formatters::formatter_types;
use crate::generators::generator_types;
use crate::pipeline::{
    RenderedReport, render_report, resolve_formatter, resolve_generator, validate_input_paths,
};

use super::request::ReportRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/report-types", get(report_types_handler))
        .route("/reports", post(report_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Handler for GET /report-types.
///
/// Lists the currently registered report and format types.
async fn report_types_handler() -> impl IntoResponse {
    Json(json!({
        "reports": generator_types(),
        "formats": formatter_types(),
    }))
}

/// Handler for POST /reports.
///
/// Renders a report from files on the server and returns it with the
/// formatter's content type.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
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
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let report_type = request
        .report
        .clone()
        .unwrap_or_else(|| state.config().report.clone());
    let format_type = request
        .format
        .clone()
        .unwrap_or_else(|| state.config().format.clone());

    let start_time = Instant::now();
    let task = {
        let report_type = report_type.clone();
        let format_type = format_type.clone();
        // File reads block, keep them off the async workers
        tokio::task::spawn_blocking(move || build_report(&request, &report_type, &format_type))
    };

    match task.await {
        Ok(Ok(rendered)) => {
            info!(
                correlation_id = %correlation_id,
                report_type = %report_type,
                format_type = %format_type,
                items = rendered.report.items().len(),
                total = rendered.report.total(),
                duration_us = start_time.elapsed().as_micros(),
                "Report request completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, rendered.content_type)],
                rendered.content,
            )
                .into_response()
        }
        Ok(Err(err)) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Report request failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
        Err(err) => {
            error!(
                correlation_id = %correlation_id,
                error = %err,
                "Report task did not complete"
            );
            ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INTERNAL_ERROR",
                    "Report generation failed",
                    err.to_string(),
                ),
            }
            .into_response()
        }
    }
}

/// Validates keys and inputs, then runs the pipeline.
fn build_report(
    request: &ReportRequest,
    report_type: &str,
    format_type: &str,
) -> ReportResult<RenderedReport> {
    resolve_generator(report_type)?;
    resolve_formatter(format_type)?;

    let files = validate_input_paths(&request.files);
    if files.is_empty() {
        return Err(ReportError::NoValidFiles);
    }

    render_report(&files, report_type, format_type)
}
