//! Shared application state for the gateway.

use std::sync::Arc;

use chairman_store::SeatService;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. Holds a
/// handle to the seat service; the gateway never owns or recreates it.
pub struct AppState<S> {
    /// The seat query service (usually a
    /// [`SeatStore`](chairman_store::SeatStore)).
    pub seats: Arc<S>,
}

impl<S: SeatService> AppState<S> {
    /// Create application state around an existing seat service.
    pub const fn new(seats: Arc<S>) -> Self {
        Self { seats }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            seats: Arc::clone(&self.seats),
        }
    }
}
