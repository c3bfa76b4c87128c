//! HTTP request handlers for the Tuition Pricing Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_quote;
use crate::models::QuoteRequest;

use super::request::ConfigUpdateRequest;
use super::response::{ApiError, ApiErrorResponse, ClassPricingEntry, ConfigView, PricingEntry};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/pricing", get(pricing_handler))
        .route("/pricing/class/:class_level", get(class_pricing_handler))
        .route("/classes", get(classes_handler))
        .route(
            "/admin/pricing-config",
            get(get_config_handler).post(update_config_handler),
        )
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a quote request and returns the calculated fee quote.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

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

    // Snapshot the configuration and the catalog slice for the class; the
    // engine never touches shared state itself
    let config = state.store().get();
    let offerings = state.catalog().for_class(&request.class_level);

    let start_time = Instant::now();
    match calculate_quote(&request, config.as_ref(), &offerings) {
        Ok(quote) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                class_level = %request.class_level,
                line_items = quote.line_items.len(),
                final_amount = quote.final_amount,
                days_per_week = quote.days_per_week,
                duration_us = duration.as_micros(),
                "Quote calculated successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(quote),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                class_level = %request.class_level,
                error = %err,
                "Quote calculation rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for GET /pricing endpoint.
///
/// Lists every active offering with its fallback pricing, ordered by class
/// level (numerically) then subject name.
async fn pricing_handler(State(state): State<AppState>) -> Json<Vec<PricingEntry>> {
    let mut entries: Vec<PricingEntry> = state
        .catalog()
        .active()
        .into_iter()
        .map(PricingEntry::from)
        .collect();

    entries.sort_by_key(|entry| {
        (
            class_sort_key(&entry.class_level),
            entry.class_level.clone(),
            entry.name.clone(),
        )
    });

    Json(entries)
}

/// Handler for GET /pricing/class/:class_level endpoint.
///
/// Lists the active offerings for one class, ordered by subject name.
async fn class_pricing_handler(
    State(state): State<AppState>,
    Path(class_level): Path<String>,
) -> Json<Vec<ClassPricingEntry>> {
    let mut entries: Vec<ClassPricingEntry> = state
        .catalog()
        .active_for_class(&class_level)
        .into_iter()
        .map(ClassPricingEntry::from)
        .collect();

    entries.sort_by(|a, b| a.name.cmp(&b.name));

    Json(entries)
}

/// Handler for GET /classes endpoint.
///
/// Lists the distinct class levels in the catalog, sorted numerically.
async fn classes_handler(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog().class_levels())
}

/// Handler for GET /admin/pricing-config endpoint.
///
/// Returns the active configuration, or an empty object when none has been
/// saved yet.
async fn get_config_handler(State(state): State<AppState>) -> Response {
    match state.store().get() {
        Some(config) => Json(ConfigView::from(config)).into_response(),
        None => Json(serde_json::json!({})).into_response(),
    }
}

/// Handler for POST /admin/pricing-config endpoint.
///
/// Applies a partial update, creating the configuration record on first
/// save, and returns the saved configuration.
async fn update_config_handler(
    State(state): State<AppState>,
    Json(request): Json<ConfigUpdateRequest>,
) -> Json<ConfigView> {
    let saved = state.store().update(request.into());
    info!(
        class_levels = saved.class_base.len(),
        discount_percent = %saved.discount_percent,
        "Pricing configuration saved"
    );
    Json(ConfigView::from(saved))
}

/// Sort key for class levels: numeric levels in order, anything else last.
fn class_sort_key(class_level: &str) -> u32 {
    class_level.parse::<u32>().unwrap_or(u32::MAX)
}
