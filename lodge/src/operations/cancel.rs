//! Booking cancellation.
//!
//! Cancellation removes the booking row outright; the room becomes
//! available for the freed window immediately.

use crate::booking::{Booking, BookingId};
use crate::database::Database;
use crate::error::{EntityKind, Error, Result};

/// Cancels a booking by identifier.
///
/// Returns the cancelled booking so callers can report what was freed.
///
/// # Errors
///
/// Returns `Error::NotFound` if no booking with the given identifier
/// exists, or a database error otherwise.
///
/// # Examples
///
/// ```no_run
/// use lodge::database::{Database, DatabaseConfig};
/// use lodge::operations::cancel_booking;
/// use lodge::BookingId;
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/lodge.db")).unwrap();
/// let cancelled = cancel_booking(&mut db, BookingId::new(1)).unwrap();
/// println!("freed {}", cancelled.dates());
/// ```
pub fn cancel_booking(db: &mut Database, id: BookingId) -> Result<Booking> {
    let booking = Database::get_booking(db.connection(), id)?.ok_or(Error::NotFound {
        entity: EntityKind::Booking,
        id: id.value(),
    })?;

    db.delete_booking(id)?;
    Ok(booking)
}

/// Cancels a booking by confirmation code.
///
/// # Errors
///
/// Returns `Error::Validation` naming the "confirmation_code" field if no
/// booking carries the given code.
pub fn cancel_booking_by_code(db: &mut Database, code: &str) -> Result<Booking> {
    let booking =
        Database::find_booking_by_code(db.connection(), code)?.ok_or_else(|| Error::Validation {
            field: "confirmation_code".into(),
            message: format!("no booking with confirmation code '{code}'"),
        })?;

    // Bookings loaded from the store always carry an id
    let id = booking.id().ok_or_else(|| Error::DatabaseCorruption {
        details: "stored booking has no identifier".into(),
    })?;

    db.delete_booking(id)?;
    Ok(booking)
}
