// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Creates per-request spans keyed by x-request-id and converts handler panics into JSON errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use axum::body::Body;
use axum::response::{IntoResponse, Response};
use http::Request;
use std::any::Any;
use swim_core::errors::AppError;
use tracing::{error, Span};

/// Header carrying the per-request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Create the tracing span for one HTTP request
///
/// The request ID is set by the outer `SetRequestIdLayer`, so it is already
/// present when the trace layer calls this.
#[must_use]
pub fn make_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}

/// Turn a caught handler panic into the standard error body
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    error!(panic = %detail, "Request handler panicked");
    AppError::internal("Internal error while generating the response").into_response()
}
