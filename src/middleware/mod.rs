// ABOUTME: HTTP middleware for request tracing, CORS, timeouts, and panic recovery
// ABOUTME: Provides request ID propagation, span creation, and the JSON panic and timeout responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// CORS configuration
pub mod cors;
/// Per-request time budget
pub mod timeout;
/// Request spans, request IDs, and panic recovery
pub mod tracing;

pub use cors::setup_cors;
pub use timeout::enforce_timeout;
pub use tracing::{make_request_span, panic_response, REQUEST_ID_HEADER};
