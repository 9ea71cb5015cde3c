//! Error types for the lodge library.
//!
//! This module provides a comprehensive error hierarchy for all operations
//! in the lodge library, using `thiserror` for ergonomic error handling.

use chrono::NaiveDate;
use thiserror::Error;

use crate::room::RoomId;

/// Result type alias for operations that may fail with a lodge error.
///
/// # Examples
///
/// ```
/// use lodge::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(2)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The kind of entity referenced by a lookup that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A hotel room.
    Room,
    /// A reservation.
    Booking,
    /// A registered guest or administrator.
    User,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Room => write!(f, "room"),
            Self::Booking => write!(f, "booking"),
            Self::User => write!(f, "user"),
        }
    }
}

/// The main error type for the lodge library.
///
/// This enum encompasses all possible error conditions that can occur
/// during reservation operations. Validation, not-found, and availability
/// conflicts are deterministic client-facing outcomes; transient errors may
/// be retried by the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested entity was not found.
    #[error("{entity} {id} not found")]
    NotFound {
        /// The kind of entity that was looked up.
        entity: EntityKind,
        /// The identifier used for the lookup.
        id: i64,
    },

    /// The room is already booked for an overlapping date window.
    #[error("room {room_id} is not available from {check_in} to {check_out}")]
    AvailabilityConflict {
        /// The contested room.
        room_id: RoomId,
        /// Requested check-in date.
        check_in: NaiveDate,
        /// Requested check-out date.
        check_out: NaiveDate,
    },

    /// A transient failure that is expected to succeed on retry.
    #[error("transient error: {reason}")]
    Transient {
        /// Why the operation could not complete this time.
        reason: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

// Additional conversions for better ergonomics

impl From<crate::booking::ValidationError> for Error {
    fn from(err: crate::booking::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if error is a field validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodge::Error;
    ///
    /// let err = Error::Validation {
    ///     field: "adults".to_string(),
    ///     message: "must be at least 1".to_string(),
    /// };
    /// assert!(err.is_validation());
    /// ```
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if error indicates an entity does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error is an availability conflict.
    ///
    /// Conflicts are reported distinctly from validation failures so a
    /// caller can re-query availability rather than correct the request.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AvailabilityConflict { .. })
    }

    /// Check if error is transient and worth retrying.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transient { .. })
    }

    /// Check if error is a database lock timeout (another writer held the
    /// lock past the busy timeout).
    #[must_use]
    pub fn is_lock_timeout(&self) -> bool {
        matches!(
            self,
            Self::Database(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error {
                    code: rusqlite::ffi::ErrorCode::DatabaseBusy,
                    ..
                },
                _,
            ))
        )
    }
}
