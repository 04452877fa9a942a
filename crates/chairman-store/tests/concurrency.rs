//! Concurrent-read tests for the seat store.
//!
//! Many readers are spawned on a multi-threaded runtime against a single
//! shared store. Every reader must get back a complete listing with unique
//! ids and known statuses, identical to the initial data.

#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

use std::collections::BTreeSet;
use std::sync::Arc;

use chairman_store::{SeatService, SeatStore};
use chairman_types::{Seat, SeatId, SeatStatus};

const READERS: usize = 256;

fn make_seats(count: i64) -> Vec<Seat> {
    (1..=count)
        .map(|id| {
            let status = if id % 3 == 0 {
                SeatStatus::Occupied
            } else {
                SeatStatus::Empty
            };
            Seat::new(SeatId::new(id), status)
        })
        .collect()
}

fn assert_consistent(listing: &[Seat], expected: &[Seat]) {
    let ids: BTreeSet<SeatId> = listing.iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), listing.len(), "duplicate id in listing");
    assert!(
        listing
            .iter()
            .all(|s| matches!(s.status, SeatStatus::Empty | SeatStatus::Occupied))
    );
    assert_eq!(listing, expected);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_snapshots_are_complete_and_consistent() {
    let expected = make_seats(500);
    let store = Arc::new(SeatStore::new(&expected).unwrap());

    let handles: Vec<_> = (0..READERS)
        .map(|_| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.snapshot().await })
        })
        .collect();

    for result in futures::future::join_all(handles).await {
        let listing = result.unwrap();
        assert_consistent(&listing, &expected);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_service_calls_never_fail() {
    let expected = make_seats(64);
    let store = Arc::new(SeatStore::new(&expected).unwrap());

    let handles: Vec<_> = (0..READERS)
        .map(|_| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.list_seats().await })
        })
        .collect();

    for result in futures::future::join_all(handles).await {
        let listing = result.unwrap().unwrap();
        assert_consistent(&listing, &expected);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn independent_stores_do_not_interfere() {
    let small = make_seats(3);
    let large = make_seats(40);
    let first = Arc::new(SeatStore::new(&small).unwrap());
    let second = Arc::new(SeatStore::new(&large).unwrap());

    let a = {
        let store = Arc::clone(&first);
        tokio::spawn(async move { store.snapshot().await })
    };
    let b = {
        let store = Arc::clone(&second);
        tokio::spawn(async move { store.snapshot().await })
    };

    assert_eq!(a.await.unwrap(), small);
    assert_eq!(b.await.unwrap(), large);
}
