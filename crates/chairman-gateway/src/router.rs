//! Axum router construction for the gateway.
//!
//! Assembles the seat route into a single [`Router`] with request
//! tracing.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use chairman_store::SeatService;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the gateway.
///
/// The router includes:
/// - `GET /api/seats` -- full seat listing
/// - any other method on `/api/seats`, `HEAD` and `OPTIONS` included --
///   `405` with an `Allow: GET` header
///
/// Unknown paths fall through to Axum's default `404`.
pub fn build_router<S: SeatService>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route(
            "/api/seats",
            // Axum serves HEAD from the GET handler unless HEAD is routed
            // explicitly.
            get(handlers::list_seats::<S>)
                .head(handlers::method_not_allowed)
                .fallback(handlers::method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
