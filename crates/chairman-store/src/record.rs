//! Raw seat input.
//!
//! [`SeatRecord`] carries the status as a plain string so that data coming
//! from outside the type system (configuration files, fixtures) is checked
//! once, when the store is built, instead of being trusted.

use chairman_types::{Seat, SeatId, SeatStatus};
use serde::{Deserialize, Serialize};

use crate::error::{InvalidSeatReason, SeatError};

/// An unvalidated seat entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatRecord {
    /// Seat identifier.
    pub id: i64,
    /// Status string, expected to be `empty` or `occupied`.
    pub status: String,
}

impl SeatRecord {
    /// Build a record from an id and a status string.
    pub fn new(id: i64, status: impl Into<String>) -> Self {
        Self {
            id,
            status: status.into(),
        }
    }

    /// Validate the status and convert into a typed [`Seat`].
    ///
    /// # Errors
    ///
    /// Returns [`SeatError::InvalidSeat`] with
    /// [`InvalidSeatReason::UnknownStatus`] when the status string is not
    /// one of the two known values.
    pub fn to_seat(&self) -> Result<Seat, SeatError> {
        let id = SeatId::new(self.id);
        let status = self
            .status
            .parse::<SeatStatus>()
            .map_err(|e| SeatError::InvalidSeat {
                id,
                reason: InvalidSeatReason::UnknownStatus(e),
            })?;
        Ok(Seat::new(id, status))
    }
}

impl From<Seat> for SeatRecord {
    fn from(seat: Seat) -> Self {
        Self::new(seat.id.into_inner(), seat.status.as_str())
    }
}
