//! Endpoint handlers for the gateway.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/seats` | List all seats |
//! | other | `/api/seats` | `405` with the method named in the body |

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, Method};
use axum::response::{IntoResponse, Response};
use chairman_store::SeatService;

use crate::error::GatewayError;
use crate::state::AppState;

/// Content type of successful seat listings.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Content type of error bodies.
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

// ---------------------------------------------------------------------------
// GET /api/seats -- list seats
// ---------------------------------------------------------------------------

/// Return every seat as a JSON array of `{"id", "status"}` objects, in
/// store order.
///
/// No query parameters are recognized; anything in the query string is
/// ignored.
pub async fn list_seats<S: SeatService>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Response, GatewayError> {
    let seats = state.seats.list_seats().await?;
    let body = serde_json::to_vec(&seats)?;

    tracing::debug!(count = seats.len(), bytes = body.len(), "listed seats");

    Ok(([(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], body).into_response())
}

// ---------------------------------------------------------------------------
// Method fallback
// ---------------------------------------------------------------------------

/// Reject any method the route does not serve.
pub async fn method_not_allowed(method: Method) -> GatewayError {
    GatewayError::MethodNotAllowed(method)
}
