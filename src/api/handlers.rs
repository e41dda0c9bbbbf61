//! HTTP request handlers for the billing API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::create_statement_data;
use crate::error::BillingError;
use crate::render::{StatementFormat, render_html, render_plain_text};

use super::request::StatementRequest;
use super::response::{ApiError, ApiErrorResponse, StatementResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/statement", post(statement_handler))
        .route("/statement/text", post(text_statement_handler))
        .route("/statement/html", post(html_statement_handler))
        .with_state(state)
}

/// Handler for POST /statement.
///
/// Returns the computed statement data together with both renderings.
async fn statement_handler(
    State(state): State<AppState>,
    payload: Result<Json<StatementRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing statement request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let plays = request.plays_or(state.plays());
    match create_statement_data(&request.invoice, plays) {
        Ok(data) => {
            info!(
                correlation_id = %correlation_id,
                customer = %data.customer,
                performances = data.performances.len(),
                total_amount = data.total_amount,
                total_volume_credits = data.total_volume_credits,
                "Statement computed successfully"
            );
            let response = StatementResponse {
                statement_id: correlation_id,
                generated_at: Utc::now(),
                text: render_plain_text(&data),
                html: render_html(&data),
                statement: data,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /statement/text.
async fn text_statement_handler(
    State(state): State<AppState>,
    payload: Result<Json<StatementRequest>, JsonRejection>,
) -> Response {
    rendered_statement(&state, payload, StatementFormat::PlainText)
}

/// Handler for POST /statement/html.
async fn html_statement_handler(
    State(state): State<AppState>,
    payload: Result<Json<StatementRequest>, JsonRejection>,
) -> Response {
    rendered_statement(&state, payload, StatementFormat::Html)
}

/// Computes a statement and responds with a single rendering as the body.
fn rendered_statement(
    state: &AppState,
    payload: Result<Json<StatementRequest>, JsonRejection>,
    format: StatementFormat,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, format = ?format, "Processing statement request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let plays = request.plays_or(state.plays());
    match create_statement_data(&request.invoice, plays) {
        Ok(data) => {
            info!(
                correlation_id = %correlation_id,
                customer = %data.customer,
                total_amount = data.total_amount,
                "Statement rendered successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, format.content_type())],
                format.render(&data),
            )
                .into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Unwraps the JSON body or builds the 400 response for a rejected body.
fn parse_request(
    payload: Result<Json<StatementRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<StatementRequest, Response> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the failure
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
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

    Err(ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response())
}

fn error_response(correlation_id: Uuid, err: BillingError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Statement failed"
    );
    ApiErrorResponse::from(err).into_response()
}
