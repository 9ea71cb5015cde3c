//! Shared test utilities for database unit tests.
//!
//! This module provides helper functions used across multiple database test modules.

use chrono::NaiveDate;
use tempfile::tempdir;

use crate::booking::{Booking, BookingId, StayDates};
use crate::database::{Database, DatabaseConfig};
use crate::room::{PriceCents, Room};
use crate::user::User;
use crate::{RoomId, UserId};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Creates a test room with the given category and nightly price in cents.
///
/// # Panics
///
/// Panics if the room cannot be built.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_room(room_type: &str, price_cents: i64) -> Room {
    let price = PriceCents::try_from(price_cents).unwrap();
    Room::builder(room_type, price).build().unwrap()
}

/// Creates a test user with the given name and email.
///
/// # Panics
///
/// Panics if the user cannot be built.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_user(name: &str, email: &str) -> User {
    User::builder(name, email, "test-hash").build().unwrap()
}

/// Creates a same-month stay interval.
///
/// # Panics
///
/// Panics on invalid or inverted dates.
#[must_use]
pub fn stay(year: i32, month: u32, in_day: u32, out_day: u32) -> StayDates {
    StayDates::new(
        NaiveDate::from_ymd_opt(year, month, in_day).unwrap(),
        NaiveDate::from_ymd_opt(year, month, out_day).unwrap(),
    )
    .unwrap()
}

/// Inserts a booking directly, bypassing the availability check.
///
/// Useful for seeding overlap scenarios that the booking operation would
/// refuse to create.
///
/// # Panics
///
/// Panics if the insert fails.
pub fn seed_booking(
    db: &mut Database,
    user_id: UserId,
    room_id: RoomId,
    dates: StayDates,
) -> BookingId {
    let booking = Booking::builder(user_id, room_id, dates).build();
    Database::insert_booking_raw(db.connection(), &booking).unwrap()
}
