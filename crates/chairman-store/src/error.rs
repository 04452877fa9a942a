//! Error types for the `chairman-store` crate.

use chairman_types::{SeatId, UnknownSeatStatus};

/// Errors produced by the seat store and its query contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatError {
    /// The initial seat data is malformed. The store is never created in
    /// this case.
    #[error("invalid seat {id}: {reason}")]
    InvalidSeat {
        /// The offending seat.
        id: SeatId,
        /// What is wrong with it.
        reason: InvalidSeatReason,
    },

    /// No seat has the requested id.
    ///
    /// Reserved for per-seat lookups. Listing all seats never produces it.
    #[error("seat not found: {0}")]
    SeatNotFound(SeatId),
}

/// Why a seat was rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSeatReason {
    /// Another seat earlier in the list already uses this id.
    #[error("duplicate seat id")]
    DuplicateId,

    /// The status is not `empty` or `occupied`.
    #[error(transparent)]
    UnknownStatus(#[from] UnknownSeatStatus),
}
