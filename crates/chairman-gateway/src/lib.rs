//! Seat query gateway for the Chairman service.
//!
//! This crate provides an Axum HTTP server that exposes the seat store
//! read-only:
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/seats` | Every seat and its status, in store order |
//!
//! Any other method on `/api/seats` gets `405 Method Not Allowed` with a
//! plain-text body naming the method.
//!
//! # Architecture
//!
//! Handlers reach the store through the [`SeatService`] contract held in
//! [`AppState`]. The store is built by the caller and passed in by handle,
//! so tests can run many independent routers side by side. This crate is
//! the only layer that turns errors into HTTP status codes and log lines.
//!
//! [`SeatService`]: chairman_store::SeatService

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::GatewayError;
pub use router::build_router;
pub use server::{bind, serve, start_server, ServerConfig, ServerError};
pub use state::AppState;
