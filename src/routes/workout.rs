// ABOUTME: Workout generation route handler for POST /generate-workout
// ABOUTME: Reads the raw body so malformed JSON still yields the standard error payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Workout generation routes
//!
//! The body is taken as raw bytes rather than through `Json<T>`, so a missing
//! content type, an empty body or malformed JSON all come back as
//! `{ "ok": false, "error": ... }` with status 400 instead of axum's plain
//! text rejections.

use crate::middleware::REQUEST_ID_HEADER;
use crate::server::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use swim_core::errors::AppError;

/// Workout generation routes
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route("/generate-workout", post(Self::handle_generate))
            .with_state(state)
    }

    /// Handle `POST /generate-workout`
    async fn handle_generate(
        State(state): State<Arc<AppState>>,
        headers: HeaderMap,
        body: Result<Bytes, BytesRejection>,
    ) -> Result<Response, AppError> {
        let request_id = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let tag = |error: AppError| match &request_id {
            Some(id) => error.with_request_id(id.clone()),
            None => error,
        };

        let bytes = body.map_err(|rejection| {
            tag(AppError::invalid_input(format!(
                "Could not read request body: {rejection}"
            )))
        })?;

        let response = state.workout.generate_from_slice(&bytes).map_err(tag)?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
