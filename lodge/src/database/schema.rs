//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and constants
//! related to the database schema for the lodge reservation system.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the rooms table.
///
/// Prices are stored in integer minor units (cents) to avoid floating
/// point rounding in monetary values.
pub const CREATE_ROOMS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS rooms (
        id INTEGER PRIMARY KEY,
        room_type TEXT NOT NULL,
        price_cents INTEGER NOT NULL,
        description TEXT,
        photo_url TEXT
    )";

/// SQL statement to create the users table.
///
/// The email column has a UNIQUE constraint so that registration can
/// rely on the database to reject duplicate accounts.
pub const CREATE_USERS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        phone TEXT,
        role TEXT NOT NULL DEFAULT 'guest',
        password_hash TEXT
    )";

/// SQL statement to create the bookings table.
///
/// Stay dates are stored as ISO 8601 text (YYYY-MM-DD), which compares
/// lexicographically in date order so overlap queries can use plain
/// string comparison. The confirmation code has a UNIQUE constraint to
/// guarantee code uniqueness under concurrent booking attempts.
/// Deleting a room cascades to its bookings.
pub const CREATE_BOOKINGS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS bookings (
        id INTEGER PRIMARY KEY,
        room_id INTEGER NOT NULL REFERENCES rooms(id) ON DELETE CASCADE,
        user_id INTEGER NOT NULL REFERENCES users(id),
        check_in TEXT NOT NULL,
        check_out TEXT NOT NULL,
        adults INTEGER NOT NULL,
        children INTEGER NOT NULL,
        confirmation_code TEXT NOT NULL UNIQUE,
        created_at INTEGER NOT NULL
    )";

/// SQL statement to create an index on the bookings room column.
///
/// This index speeds up availability checks for a single room.
pub const CREATE_BOOKING_ROOM_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_bookings_room ON bookings(room_id, check_in)";

/// SQL statement to create an index on the bookings user column.
///
/// This index speeds up per-user booking history queries.
pub const CREATE_BOOKING_USER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_bookings_user ON bookings(user_id)";

/// SQL statement to create an index on the room type column.
///
/// This index speeds up type-filtered room searches.
pub const CREATE_ROOM_TYPE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_rooms_type ON rooms(room_type)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a booking.
///
/// Used by the booking creation flow inside its availability
/// transaction.
pub const INSERT_BOOKING: &str = r"
    INSERT INTO bookings
    (room_id, user_id, check_in, check_out, adults, children, confirmation_code, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
";

/// SQL statement to count bookings that overlap a half-open date range
/// for a given room.
///
/// Two stays overlap when each begins before the other ends. Checkout
/// day equals check-in day is NOT a conflict: the departing guest's
/// interval is exclusive of its end date.
pub const COUNT_OVERLAPPING_BOOKINGS: &str = r"
    SELECT COUNT(*) FROM bookings
    WHERE room_id = ? AND check_in < ? AND check_out > ?
";
