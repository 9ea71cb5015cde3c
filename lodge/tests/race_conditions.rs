//! Race condition tests for lodge.
//!
//! These tests open several connections against the same SQLite store (WAL
//! mode) and issue conflicting bookings simultaneously, verifying that the
//! commit-time availability recheck holds under contention: a room is never
//! double-booked no matter how requests interleave.

mod common;

use std::collections::HashSet;
use std::thread;

use common::database::{create_shared_database_path, seed_room, seed_user};
use common::{stay, FixedClock};

use lodge::database::{Database, DatabaseConfig};
use lodge::operations::{create_booking_with_clock, BookingRequest};
use lodge::Config;

/// Spawns `n` threads that each open their own connection and race to book
/// the same room over the same window. Exactly one must win.
#[test]
fn test_concurrent_bookings_same_room_one_winner() {
    let path = create_shared_database_path();
    let (room_id, user_id) = {
        let mut db = Database::open(DatabaseConfig::new(&path)).unwrap();
        let room_id = seed_room(&mut db, "Single");
        let user_id = seed_user(&mut db, "Ada Lovelace", "ada@example.com");
        (room_id, user_id)
    };

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let path = path.clone();
            thread::spawn(move || {
                let mut db = Database::open(DatabaseConfig::new(&path)).unwrap();
                let request =
                    BookingRequest::new(user_id, room_id, stay("2024-06-01", "2024-06-05"));
                create_booking_with_clock(
                    &mut db,
                    &Config::default(),
                    &request,
                    &FixedClock::spring_2024(),
                )
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let winners = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(winners, 1, "exactly one booking should win the window");

    for result in &results {
        if let Err(err) = result {
            assert!(
                err.is_conflict(),
                "losing bookings should fail with an availability conflict, got {err}"
            );
        }
    }

    // The store agrees: a single booking for the room
    let db = Database::open(DatabaseConfig::new(&path)).unwrap();
    let bookings = Database::bookings_for_room(db.connection(), room_id).unwrap();
    assert_eq!(bookings.len(), 1);
}

/// Concurrent bookings for distinct rooms must all succeed, each with a
/// unique confirmation code.
#[test]
fn test_concurrent_bookings_distinct_rooms_all_succeed() {
    let path = create_shared_database_path();
    let (room_ids, user_id) = {
        let mut db = Database::open(DatabaseConfig::new(&path)).unwrap();
        let rooms: Vec<_> = (0..6).map(|_| seed_room(&mut db, "Single")).collect();
        let user_id = seed_user(&mut db, "Ada Lovelace", "ada@example.com");
        (rooms, user_id)
    };

    let handles: Vec<_> = room_ids
        .into_iter()
        .map(|room_id| {
            let path = path.clone();
            thread::spawn(move || {
                let mut db = Database::open(DatabaseConfig::new(&path)).unwrap();
                let request =
                    BookingRequest::new(user_id, room_id, stay("2024-06-01", "2024-06-05"));
                create_booking_with_clock(
                    &mut db,
                    &Config::default(),
                    &request,
                    &FixedClock::spring_2024(),
                )
            })
        })
        .collect();

    let bookings: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().unwrap().expect("distinct rooms should not conflict"))
        .collect();

    let codes: HashSet<_> = bookings
        .iter()
        .map(|b| b.confirmation_code().as_str().to_string())
        .collect();
    assert_eq!(codes.len(), bookings.len(), "confirmation codes must be unique");
}

/// Back-to-back windows for the same room issued concurrently never
/// conflict with each other.
#[test]
fn test_concurrent_back_to_back_windows_both_succeed() {
    let path = create_shared_database_path();
    let (room_id, user_id) = {
        let mut db = Database::open(DatabaseConfig::new(&path)).unwrap();
        let room_id = seed_room(&mut db, "Single");
        let user_id = seed_user(&mut db, "Ada Lovelace", "ada@example.com");
        (room_id, user_id)
    };

    let windows = [
        ("2024-06-01", "2024-06-05"),
        ("2024-06-05", "2024-06-08"),
        ("2024-06-08", "2024-06-12"),
    ];

    let handles: Vec<_> = windows
        .into_iter()
        .map(|(check_in, check_out)| {
            let path = path.clone();
            thread::spawn(move || {
                let mut db = Database::open(DatabaseConfig::new(&path)).unwrap();
                let request = BookingRequest::new(user_id, room_id, stay(check_in, check_out));
                create_booking_with_clock(
                    &mut db,
                    &Config::default(),
                    &request,
                    &FixedClock::spring_2024(),
                )
            })
        })
        .collect();

    for handle in handles {
        handle
            .join()
            .unwrap()
            .expect("adjacent windows should never conflict");
    }
}
