//! The seat query contract.
//!
//! The gateway depends on [`SeatService`] rather than on [`SeatStore`]
//! directly, so any implementation that can produce a full seat listing
//! can sit behind the HTTP surface.

use chairman_types::Seat;

use crate::error::SeatError;
use crate::store::SeatStore;

/// Read access to the full set of seats.
pub trait SeatService: Send + Sync + 'static {
    /// Return every seat, in canonical order, as an owned copy.
    ///
    /// The returned vector must never share state with the service: later
    /// changes to the service do not alter a listing already returned.
    fn list_seats(&self) -> impl Future<Output = Result<Vec<Seat>, SeatError>> + Send;
}

impl SeatService for SeatStore {
    /// Never fails: the listing is a bounded in-memory copy.
    fn list_seats(&self) -> impl Future<Output = Result<Vec<Seat>, SeatError>> + Send {
        async move { Ok(self.snapshot().await) }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chairman_types::{SeatId, SeatStatus};

    use super::*;

    #[tokio::test]
    async fn store_listing_matches_snapshot() {
        let seats = [
            Seat::new(SeatId::new(1), SeatStatus::Empty),
            Seat::new(SeatId::new(2), SeatStatus::Occupied),
        ];
        let store = SeatStore::new(&seats).unwrap();

        let listed = store.list_seats().await;
        assert_eq!(listed, Ok(seats.to_vec()));
    }

    #[tokio::test]
    async fn listing_never_reports_seat_not_found() {
        let stores = [
            SeatStore::new(&[]).unwrap(),
            SeatStore::new(&[Seat::new(SeatId::new(1), SeatStatus::Empty)]).unwrap(),
        ];

        for store in &stores {
            for _ in 0..5 {
                let result = store.list_seats().await;
                assert!(!matches!(result, Err(SeatError::SeatNotFound(_))));
                assert!(result.is_ok());
            }
        }
    }
}
