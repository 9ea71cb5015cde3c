//! Database CRUD operations for bookings.
//!
//! This module implements persistence for reservations. Booking creation
//! itself lives in the operations layer because it must run inside an
//! availability-checking transaction; the raw insert and overlap-count
//! helpers it uses are defined here alongside the read paths.

use std::time::{Duration, SystemTime};

use chrono::NaiveDate;
use rusqlite::{params, Connection, TransactionBehavior};

use crate::booking::{Booking, BookingId, Occupancy, StayDates};
use crate::confirmation::ConfirmationCode;
use crate::error::Result;
use crate::room::RoomId;
use crate::user::UserId;

use super::connection::Database;
use super::schema::{COUNT_OVERLAPPING_BOOKINGS, INSERT_BOOKING};

/// Converts Unix epoch seconds from the database to a `SystemTime`.
#[allow(clippy::cast_sign_loss)]
pub(super) fn unix_secs_to_systemtime(secs: i64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs as u64)
}

/// Parses an ISO 8601 date column value.
fn parse_date_column(value: &str) -> rusqlite::Result<NaiveDate> {
    value
        .parse::<NaiveDate>()
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Helper function to deserialize a booking from a database row.
///
/// Expects row fields in this order: id, `room_id`, `user_id`, `check_in`,
/// `check_out`, adults, children, `confirmation_code`, `created_at`
fn row_to_booking(row: &rusqlite::Row<'_>) -> rusqlite::Result<Booking> {
    let id: i64 = row.get(0)?;
    let room_id: i64 = row.get(1)?;
    let user_id: i64 = row.get(2)?;
    let check_in: String = row.get(3)?;
    let check_out: String = row.get(4)?;
    let adults: u32 = row.get(5)?;
    let children: u32 = row.get(6)?;
    let code: String = row.get(7)?;
    let created_secs: i64 = row.get(8)?;

    let dates = StayDates::new(parse_date_column(&check_in)?, parse_date_column(&check_out)?)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    let occupancy = Occupancy::new(adults, children)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    Ok(
        Booking::builder(UserId::new(user_id), RoomId::new(room_id), dates)
            .id(BookingId::new(id))
            .occupancy(occupancy)
            .confirmation_code(ConfirmationCode::from_stored(code))
            .created_at(unix_secs_to_systemtime(created_secs))
            .build(),
    )
}

// SQL statements for booking read and delete operations
const SELECT_BOOKING: &str = r"
    SELECT id, room_id, user_id, check_in, check_out, adults, children,
           confirmation_code, created_at
    FROM bookings
    WHERE id = ?
";

const SELECT_BOOKING_BY_CODE: &str = r"
    SELECT id, room_id, user_id, check_in, check_out, adults, children,
           confirmation_code, created_at
    FROM bookings
    WHERE confirmation_code = ?
";

const SELECT_BOOKINGS_FOR_ROOM: &str = r"
    SELECT id, room_id, user_id, check_in, check_out, adults, children,
           confirmation_code, created_at
    FROM bookings
    WHERE room_id = ?
    ORDER BY check_in
";

const SELECT_BOOKINGS_FOR_USER: &str = r"
    SELECT id, room_id, user_id, check_in, check_out, adults, children,
           confirmation_code, created_at
    FROM bookings
    WHERE user_id = ?
    ORDER BY check_in
";

const LIST_BOOKINGS: &str = r"
    SELECT id, room_id, user_id, check_in, check_out, adults, children,
           confirmation_code, created_at
    FROM bookings
    ORDER BY id
";

const DELETE_BOOKING: &str = r"
    DELETE FROM bookings WHERE id = ?
";

impl Database {
    /// Inserts a booking using an existing connection or transaction.
    ///
    /// This method is intended for use within an existing transaction
    /// context (the booking creation flow, which checks availability and
    /// inserts atomically). It does not create its own transaction.
    ///
    /// # Errors
    ///
    /// Returns the raw `rusqlite` error so the caller can distinguish a
    /// UNIQUE confirmation-code collision from other failures.
    pub(crate) fn insert_booking_raw(
        conn: &Connection,
        booking: &Booking,
    ) -> std::result::Result<BookingId, rusqlite::Error> {
        let created_secs = booking
            .created_at()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?
            .as_secs();

        conn.execute(
            INSERT_BOOKING,
            params![
                booking.room_id().value(),
                booking.user_id().value(),
                booking.dates().check_in().to_string(),
                booking.dates().check_out().to_string(),
                booking.occupancy().adults(),
                booking.occupancy().children(),
                booking.confirmation_code().as_str(),
                i64::try_from(created_secs)
                    .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?,
            ],
        )?;

        Ok(BookingId::new(conn.last_insert_rowid()))
    }

    /// Counts bookings for a room that overlap the given stay interval.
    ///
    /// Overlap is evaluated with half-open semantics: a booking checking
    /// out on the requested check-in date does not count.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_overlapping_bookings(
        conn: &Connection,
        room_id: RoomId,
        dates: &StayDates,
    ) -> Result<i64> {
        let count: i64 = conn.query_row(
            COUNT_OVERLAPPING_BOOKINGS,
            params![
                room_id.value(),
                dates.check_out().to_string(),
                dates.check_in().to_string(),
            ],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Retrieves a booking by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    ///
    /// # Returns
    ///
    /// - `Ok(Some(booking))` if the booking exists
    /// - `Ok(None)` if the booking doesn't exist
    /// - `Err(_)` if a database error occurs
    pub fn get_booking(conn: &Connection, id: BookingId) -> Result<Option<Booking>> {
        let mut stmt = conn.prepare(SELECT_BOOKING)?;

        match stmt.query_row(params![id.value()], row_to_booking) {
            Ok(booking) => Ok(Some(booking)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Retrieves a booking by its confirmation code.
    ///
    /// Codes are unique, so at most one booking matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    pub fn find_booking_by_code(conn: &Connection, code: &str) -> Result<Option<Booking>> {
        let mut stmt = conn.prepare(SELECT_BOOKING_BY_CODE)?;

        match stmt.query_row(params![code], row_to_booking) {
            Ok(booking) => Ok(Some(booking)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists all bookings for a room, ordered by check-in date.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn bookings_for_room(conn: &Connection, room_id: RoomId) -> Result<Vec<Booking>> {
        let mut stmt = conn.prepare(SELECT_BOOKINGS_FOR_ROOM)?;
        let bookings = stmt
            .query_map(params![room_id.value()], row_to_booking)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(bookings)
    }

    /// Lists all bookings made by a user, ordered by check-in date.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn bookings_for_user(conn: &Connection, user_id: UserId) -> Result<Vec<Booking>> {
        let mut stmt = conn.prepare(SELECT_BOOKINGS_FOR_USER)?;
        let bookings = stmt
            .query_map(params![user_id.value()], row_to_booking)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(bookings)
    }

    /// Lists all bookings, ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_bookings(conn: &Connection) -> Result<Vec<Booking>> {
        let mut stmt = conn.prepare(LIST_BOOKINGS)?;
        let bookings = stmt
            .query_map([], row_to_booking)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(bookings)
    }

    /// Deletes a booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or delete fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the booking was found and deleted
    /// - `Ok(false)` if the booking was not found
    pub fn delete_booking(&mut self, id: BookingId) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let deleted = tx.execute(DELETE_BOOKING, params![id.value()])?;
        tx.commit()?;

        Ok(deleted > 0)
    }
}
