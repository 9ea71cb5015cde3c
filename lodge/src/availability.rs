//! Room availability queries.
//!
//! All queries in this module evaluate stay intervals with half-open
//! `[check_in, check_out)` semantics: the check-out day is not occupied,
//! so a room checking out on day D is available to a guest checking in on
//! day D.

use rusqlite::{params, Connection};

use crate::booking::StayDates;
use crate::database::Database;
use crate::error::Result;
use crate::room::{PriceCents, Room, RoomId};

// Availability queries share the overlap predicate with the booking flow:
// a booking conflicts iff it starts before the requested check-out and
// ends after the requested check-in.
const SELECT_AVAILABLE_ROOMS: &str = r"
    SELECT id, room_type, price_cents, description, photo_url
    FROM rooms
    WHERE room_type LIKE '%' || ? || '%'
      AND id NOT IN (
          SELECT room_id FROM bookings
          WHERE check_in < ? AND check_out > ?
      )
    ORDER BY id
";

const SELECT_UNBOOKED_ROOMS: &str = r"
    SELECT id, room_type, price_cents, description, photo_url
    FROM rooms
    WHERE id NOT IN (SELECT room_id FROM bookings)
    ORDER BY id
";

fn row_to_room(row: &rusqlite::Row<'_>) -> rusqlite::Result<Room> {
    let id: i64 = row.get(0)?;
    let room_type: String = row.get(1)?;
    let price_cents: i64 = row.get(2)?;
    let description: Option<String> = row.get(3)?;
    let photo_url: Option<String> = row.get(4)?;

    let price = PriceCents::try_from(price_cents)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    Room::builder(room_type, price)
        .id(RoomId::new(id))
        .description(description)
        .photo_url(photo_url)
        .build()
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

impl Database {
    /// Returns whether a room has no booking overlapping the given stay.
    ///
    /// A booking that checks out on the requested check-in date does not
    /// block the room.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chrono::NaiveDate;
    /// use lodge::database::{Database, DatabaseConfig};
    /// use lodge::{RoomId, StayDates};
    ///
    /// let db = Database::open(DatabaseConfig::new("/tmp/lodge.db")).unwrap();
    /// let dates = StayDates::new(
    ///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
    /// ).unwrap();
    ///
    /// if Database::is_room_available(db.connection(), RoomId::new(1), &dates).unwrap() {
    ///     println!("room is free");
    /// }
    /// ```
    pub fn is_room_available(
        conn: &Connection,
        room_id: RoomId,
        dates: &StayDates,
    ) -> Result<bool> {
        let overlapping = Self::count_overlapping_bookings(conn, room_id, dates)?;
        Ok(overlapping == 0)
    }

    /// Lists rooms free for the entire stay, optionally filtered by category.
    ///
    /// The category filter is a case-insensitive substring match, so
    /// "deluxe" matches "Double Deluxe". Passing `None` (or an empty
    /// string) returns rooms of every category.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn available_rooms(
        conn: &Connection,
        room_type: Option<&str>,
        dates: &StayDates,
    ) -> Result<Vec<Room>> {
        let filter = room_type.unwrap_or("");
        let mut stmt = conn.prepare(SELECT_AVAILABLE_ROOMS)?;
        let rooms = stmt
            .query_map(
                params![
                    filter,
                    dates.check_out().to_string(),
                    dates.check_in().to_string(),
                ],
                row_to_room,
            )?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rooms)
    }

    /// Lists rooms that have never been booked.
    ///
    /// Rooms whose bookings have all been cancelled count as unbooked.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn unbooked_rooms(conn: &Connection) -> Result<Vec<Room>> {
        let mut stmt = conn.prepare(SELECT_UNBOOKED_ROOMS)?;
        let rooms = stmt
            .query_map([], row_to_room)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rooms)
    }
}
