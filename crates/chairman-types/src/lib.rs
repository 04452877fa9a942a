//! Shared type definitions for the Chairman seat-status service.
//!
//! This crate is the single source of truth for the seat wire model. Types
//! defined here flow downstream to `TypeScript` via `ts-rs` for the seat
//! map frontend.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe seat identifier
//! - [`enums`] -- Seat occupancy status
//! - [`structs`] -- The [`Seat`] record served over HTTP

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{SeatStatus, UnknownSeatStatus};
pub use ids::SeatId;
pub use structs::Seat;
