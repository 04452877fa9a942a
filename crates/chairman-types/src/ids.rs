//! Type-safe seat identifier.
//!
//! Seat ids are plain integers on the wire. The newtype keeps them from
//! being mixed up with counts or indices inside the service.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Unique identifier for a seat.
///
/// Stable for the lifetime of the process. Serialized transparently as a
/// JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export, export_to = "bindings/")]
pub struct SeatId(#[ts(type = "number")] pub i64);

impl SeatId {
    /// Wrap a raw integer id.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Return the inner integer value.
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for SeatId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SeatId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<SeatId> for i64 {
    fn from(id: SeatId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&SeatId::new(42));
        assert_eq!(json.ok().as_deref(), Some("42"));
    }

    #[test]
    fn display_matches_inner_value() {
        assert_eq!(SeatId::from(-7).to_string(), "-7");
        assert_eq!(i64::from(SeatId::new(3)), 3);
    }
}
