// ABOUTME: Per-request time budget middleware
// ABOUTME: Aborts slow handlers and answers with the standard JSON error body and a 408 status
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::time::Duration;
use swim_core::errors::AppError;
use tracing::warn;

/// Run the rest of the stack under `limit`
///
/// Install with `axum::middleware::from_fn_with_state(limit, enforce_timeout)`.
/// When the budget runs out the inner future is dropped and the caller gets
/// `408 { ok: false, code: "REQUEST_TIMEOUT" }`.
pub async fn enforce_timeout(
    State(limit): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    if let Ok(response) = tokio::time::timeout(limit, next.run(request)).await {
        response
    } else {
        warn!(path = %path, limit = ?limit, "Request timed out");
        AppError::timeout(format!(
            "Request did not complete within {}ms",
            limit.as_millis()
        ))
        .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::routing::get;
    use axum::{middleware, Router};
    use tower::ServiceExt;

    fn router(limit: Duration) -> Router {
        Router::new()
            .route("/fast", get(|| async { "done" }))
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(30)).await;
                    "too late"
                }),
            )
            .layer(middleware::from_fn_with_state(limit, enforce_timeout))
    }

    async fn call(app: Router, uri: &str) -> (u16, Vec<u8>) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status().as_u16();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_slow_handler_gets_json_408() {
        let (status, body) = call(router(Duration::from_millis(20)), "/slow").await;

        assert_eq!(status, 408);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["code"], "REQUEST_TIMEOUT");
        assert!(json["error"].as_str().unwrap().contains("20ms"));
    }

    #[tokio::test]
    async fn test_fast_handler_passes_through() {
        let (status, body) = call(router(Duration::from_secs(5)), "/fast").await;

        assert_eq!(status, 200);
        assert_eq!(body, b"done");
    }
}
