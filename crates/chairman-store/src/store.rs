//! The seat store.
//!
//! [`SeatStore`] holds the ordered seat collection behind a
//! [`tokio::sync::RwLock`]. Construction validates and deep-copies the
//! caller's list; after that the only operation is [`SeatStore::snapshot`],
//! which copies the collection out under a shared lock.

use std::collections::BTreeSet;

use chairman_types::Seat;
use tokio::sync::RwLock;

use crate::error::{InvalidSeatReason, SeatError};
use crate::record::SeatRecord;

/// Authoritative in-memory seat collection.
///
/// Seats are kept in the order they were supplied at construction and are
/// returned in that order. Ids are unique. The store is an ordinary owned
/// value: wrap it in an [`Arc`](std::sync::Arc) to share it between
/// request handlers, and build as many independent stores as needed.
#[derive(Debug)]
pub struct SeatStore {
    seats: RwLock<Vec<Seat>>,
}

impl SeatStore {
    /// Create a store from an ordered list of seats.
    ///
    /// The list is copied; later changes to the caller's slice do not
    /// reach the store. An empty list is valid.
    ///
    /// # Errors
    ///
    /// Returns [`SeatError::InvalidSeat`] with
    /// [`InvalidSeatReason::DuplicateId`] for the first seat whose id was
    /// already used earlier in the list.
    pub fn new(initial: &[Seat]) -> Result<Self, SeatError> {
        let mut seen = BTreeSet::new();
        for seat in initial {
            if !seen.insert(seat.id) {
                return Err(SeatError::InvalidSeat {
                    id: seat.id,
                    reason: InvalidSeatReason::DuplicateId,
                });
            }
        }

        Ok(Self {
            seats: RwLock::new(initial.to_vec()),
        })
    }

    /// Create a store from unvalidated records.
    ///
    /// # Errors
    ///
    /// Returns [`SeatError::InvalidSeat`] if any status string is unknown
    /// or any id is repeated.
    pub fn from_records(records: &[SeatRecord]) -> Result<Self, SeatError> {
        let seats = records
            .iter()
            .map(SeatRecord::to_seat)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&seats)
    }

    /// Return an independent copy of every seat, in store order.
    ///
    /// Holds the shared lock only while cloning.
    pub async fn snapshot(&self) -> Vec<Seat> {
        self.seats.read().await.clone()
    }

    /// Number of seats in the store.
    pub async fn len(&self) -> usize {
        self.seats.read().await.len()
    }

    /// Whether the store has no seats.
    pub async fn is_empty(&self) -> bool {
        self.seats.read().await.is_empty()
    }
}
