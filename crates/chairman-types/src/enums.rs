//! Enumeration types for the seat model.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Occupancy status of a seat.
///
/// Closed set: a seat is either empty or occupied. Serialized as the
/// lowercase strings `"empty"` and `"occupied"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum SeatStatus {
    /// Nobody is sitting here.
    Empty,
    /// The seat is taken.
    Occupied,
}

impl SeatStatus {
    /// The wire representation of this status.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Occupied => "occupied",
        }
    }

    /// Whether the seat is taken.
    pub const fn is_occupied(self) -> bool {
        matches!(self, Self::Occupied)
    }
}

impl core::fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status string outside the `empty` / `occupied` set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown seat status: {0:?}")]
pub struct UnknownSeatStatus(pub String);

impl FromStr for SeatStatus {
    type Err = UnknownSeatStatus;

    /// Parse the exact wire strings. Matching is case-sensitive, as on the
    /// wire.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "empty" => Ok(Self::Empty),
            "occupied" => Ok(Self::Occupied),
            other => Err(UnknownSeatStatus(other.to_owned())),
        }
    }
}
