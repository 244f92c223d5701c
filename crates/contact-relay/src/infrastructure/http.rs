//! HTTP surface of the relay: routing, request tracing, and the handlers.
//!
//! | Method | Path           | Handler                |
//! |--------|----------------|------------------------|
//! | POST   | `/api/contact` | [`contact_handler`]    |
//! | GET    | `/healthz`     | liveness probe         |
//!
//! The contact handler reads the body as raw bytes instead of using the
//! `Json` extractor.  A body that is not JSON, or not an object, is then
//! answered like any incomplete submission (400 `Missing fields`) rather
//! than with axum's own rejection format.

use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use contact_core::{RawSubmission, CONTACT_PATH};
use serde_json::json;
use tracing::Instrument;

use crate::application::{RelayOutcome, RelayService};

/// Largest request body accepted on any route.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<RelayService>,
}

impl AppState {
    pub fn new(relay: RelayService) -> Self {
        Self {
            relay: Arc::new(relay),
        }
    }
}

/// Builds the relay's router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(CONTACT_PATH, post(contact_handler))
        .route("/healthz", get(healthz_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware::from_fn(request_tracing_middleware))
        .with_state(state)
}

/// `POST /api/contact`: relays one submission and maps the outcome to
/// `200 {"success":true}`, `400 {"error":"Missing fields"}`, or
/// `500 {"error":"Failed to send email"}`.
pub async fn contact_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let raw = RawSubmission::from_json(&body);
    let outcome = state.relay.relay(raw).await;

    let status = match outcome {
        RelayOutcome::Sent => StatusCode::OK,
        RelayOutcome::MissingFields => StatusCode::BAD_REQUEST,
        RelayOutcome::SendFailed => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(outcome.body())).into_response()
}

async fn healthz_handler() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

async fn request_tracing_middleware(request: Request<Body>, next: Next) -> Response {
    let span = tracing::info_span!(
        "http.request",
        method = %request.method(),
        route = %request.uri().path(),
    );

    async move {
        let response = next.run(request).await;
        tracing::debug!(status = response.status().as_u16(), "request finished");
        response
    }
    .instrument(span)
    .await
}
