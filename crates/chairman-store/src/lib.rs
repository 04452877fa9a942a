//! In-memory seat-status store for the Chairman service.
//!
//! This crate owns the authoritative set of seats and the query contract
//! the HTTP gateway depends on.
//!
//! # Modules
//!
//! - [`store`] -- [`SeatStore`], a lock-guarded ordered seat collection
//!   that hands out independent snapshots
//! - [`service`] -- [`SeatService`], the read contract consumed by the
//!   gateway
//! - [`record`] -- [`SeatRecord`], untrusted seat input (for example from
//!   configuration) validated at construction
//! - [`error`] -- [`SeatError`] taxonomy
//!
//! # Concurrency
//!
//! Reads take a shared lock for exactly as long as it takes to copy the
//! collection. Any number of readers proceed in parallel; a writer, if one
//! is ever added, must take the exclusive lock so no reader can observe a
//! half-applied change.
//!
//! The store never logs. It returns values or errors and leaves the
//! user-visible consequences to its caller.

pub mod error;
pub mod record;
pub mod service;
pub mod store;

// Re-export primary types for convenience.
pub use error::{InvalidSeatReason, SeatError};
pub use record::SeatRecord;
pub use service::SeatService;
pub use store::SeatStore;
