//! Core entity structs.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::SeatStatus;
use crate::ids::SeatId;

/// A single seat and its occupancy status.
///
/// Serializes to `{"id": <integer>, "status": "empty" | "occupied"}`.
/// The type is `Copy`, so every snapshot handed out is an owned value
/// with no shared backing storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Seat {
    /// Unique seat identifier.
    pub id: SeatId,
    /// Current occupancy.
    pub status: SeatStatus,
}

impl Seat {
    /// Create a seat record.
    pub const fn new(id: SeatId, status: SeatStatus) -> Self {
        Self { id, status }
    }
}
