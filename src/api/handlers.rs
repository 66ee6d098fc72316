//! HTTP request handlers for the ZIP Code Eligibility Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::matching::rank;
use crate::models::ZipCode;

use super::request::SearchRequest;
use super::response::{ApiError, ApiErrorResponse, SearchResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/search", post(search_handler))
        .with_state(state)
}

/// Handler for POST /search endpoint.
///
/// Accepts a ZIP code plus optional facets and returns the eligible jobs
/// in display order.
async fn search_handler(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing search request");

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
                        ApiError::validation_error(body_text)
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
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Validate the ZIP code at the boundary
    let zip: ZipCode = match request.zip_code.parse() {
        Ok(zip) => zip,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                zip_code = %request.zip_code,
                "Invalid ZIP code"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    // Run the eligibility evaluation over a point-in-time snapshot
    let start_time = Instant::now();
    let engine = state.engine();
    let jobs = state.store().snapshot();

    let faceted: Vec<_> = jobs
        .iter()
        .filter(|job| request.job_type.matches(job) && request.experience.matches(job))
        .cloned()
        .collect();
    let eligible = engine.filter(&zip, &faceted);
    let ranked = rank(eligible);

    let state = SearchResponse::state_label(&engine.resolve_state(&zip));
    let duration = start_time.elapsed();
    info!(
        correlation_id = %correlation_id,
        zip_code = %zip,
        state = %state,
        total = ranked.len(),
        duration_us = duration.as_micros(),
        "Search completed successfully"
    );

    let response = SearchResponse {
        zip_code: zip.to_string(),
        state,
        total: ranked.len(),
        jobs: ranked,
    };
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}
