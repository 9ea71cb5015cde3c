//! Booking types for tracking room reservations.
//!
//! This module provides the [`Booking`] entity and its supporting value
//! types: [`StayDates`] (the half-open check-in/check-out interval),
//! [`Occupancy`] (validated guest counts with a derived total), and the
//! builder used to construct bookings.

use std::fmt;
use std::time::SystemTime;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::confirmation::ConfirmationCode;
use crate::room::RoomId;
use crate::user::UserId;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

/// A unique identifier for a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(i64);

impl BookingId {
    /// Creates a booking identifier from a raw database id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A half-open stay interval `[check_in, check_out)`.
///
/// The check-out day is not occupied: a booking checking out on day D and
/// another checking in on day D do not conflict, so back-to-back turnover is
/// legal. The same rule applies to every availability query in the library.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lodge::StayDates;
///
/// let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
///
/// let stay = StayDates::new(d(2024, 6, 1), d(2024, 6, 5)).unwrap();
/// let back_to_back = StayDates::new(d(2024, 6, 5), d(2024, 6, 8)).unwrap();
/// let overlapping = StayDates::new(d(2024, 6, 4), d(2024, 6, 6)).unwrap();
///
/// assert!(!stay.overlaps(&back_to_back));
/// assert!(stay.overlaps(&overlapping));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StayDates {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayDates {
    /// Creates a stay interval.
    ///
    /// # Errors
    ///
    /// Returns an error if `check_out` is not strictly after `check_in`.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, ValidationError> {
        if check_out <= check_in {
            return Err(ValidationError {
                field: "check_out".into(),
                message: format!(
                    "check-out date ({check_out}) must be after check-in date ({check_in})"
                ),
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Returns the check-in date.
    #[must_use]
    pub const fn check_in(self) -> NaiveDate {
        self.check_in
    }

    /// Returns the check-out date.
    #[must_use]
    pub const fn check_out(self) -> NaiveDate {
        self.check_out
    }

    /// Returns the number of nights in the stay.
    #[must_use]
    pub fn nights(self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Returns whether this interval shares at least one night with `other`.
    ///
    /// Two half-open intervals overlap iff each starts before the other
    /// ends: `a.check_in < b.check_out && a.check_out > b.check_in`.
    #[must_use]
    pub fn overlaps(self, other: &Self) -> bool {
        self.check_in < other.check_out && self.check_out > other.check_in
    }
}

impl fmt::Display for StayDates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.check_in, self.check_out)
    }
}

/// Validated guest counts for a booking.
///
/// The total guest count is always derived from the two components and can
/// never be set independently.
///
/// # Examples
///
/// ```
/// use lodge::Occupancy;
///
/// let occupancy = Occupancy::new(2, 1).unwrap();
/// assert_eq!(occupancy.total(), 3);
///
/// // At least one adult is required.
/// assert!(Occupancy::new(0, 2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occupancy {
    adults: u32,
    children: u32,
}

impl Default for Occupancy {
    /// One adult, no children.
    fn default() -> Self {
        Self {
            adults: 1,
            children: 0,
        }
    }
}

impl Occupancy {
    /// Creates a guest count.
    ///
    /// # Errors
    ///
    /// Returns an error naming the "adults" field if `adults` is zero.
    pub fn new(adults: u32, children: u32) -> Result<Self, ValidationError> {
        if adults < 1 {
            return Err(ValidationError {
                field: "adults".into(),
                message: "number of adults must be at least 1".into(),
            });
        }
        Ok(Self { adults, children })
    }

    /// Returns the number of adults.
    #[must_use]
    pub const fn adults(self) -> u32 {
        self.adults
    }

    /// Returns the number of children.
    #[must_use]
    pub const fn children(self) -> u32 {
        self.children
    }

    /// Returns the derived total number of guests.
    ///
    /// Widened so the sum cannot overflow for any pair of counts.
    #[must_use]
    pub fn total(self) -> u64 {
        u64::from(self.adults) + u64::from(self.children)
    }

    /// Returns a copy with the adult count replaced.
    ///
    /// The total is recomputed implicitly, since it is never stored.
    ///
    /// # Errors
    ///
    /// Returns an error if `adults` is zero.
    pub fn with_adults(self, adults: u32) -> Result<Self, ValidationError> {
        Self::new(adults, self.children)
    }

    /// Returns a copy with the child count replaced.
    #[must_use]
    pub const fn with_children(self, children: u32) -> Self {
        Self {
            adults: self.adults,
            children,
        }
    }
}

/// A room reservation.
///
/// Bookings link exactly one user to exactly one room over a half-open stay
/// interval, and carry an immutable confirmation code assigned at creation.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lodge::{Booking, ConfirmationCode, Occupancy, RoomId, StayDates, UserId};
///
/// let dates = StayDates::new(
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
/// ).unwrap();
///
/// let booking = Booking::builder(UserId::new(1), RoomId::new(2), dates)
///     .occupancy(Occupancy::new(2, 1).unwrap())
///     .confirmation_code(ConfirmationCode::generate(6))
///     .build();
///
/// assert_eq!(booking.occupancy().total(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    id: Option<BookingId>,
    user_id: UserId,
    room_id: RoomId,
    dates: StayDates,
    occupancy: Occupancy,
    confirmation_code: ConfirmationCode,
    created_at: SystemTime,
}

impl Booking {
    /// Creates a new booking builder.
    #[must_use]
    pub fn builder(user_id: UserId, room_id: RoomId, dates: StayDates) -> BookingBuilder {
        BookingBuilder {
            id: None,
            user_id,
            room_id,
            dates,
            occupancy: None,
            confirmation_code: None,
            created_at: None,
        }
    }

    /// Returns the booking identifier, if the booking has been persisted.
    #[must_use]
    pub const fn id(&self) -> Option<BookingId> {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the booked room.
    #[must_use]
    pub const fn room_id(&self) -> RoomId {
        self.room_id
    }

    /// Returns the stay interval.
    #[must_use]
    pub const fn dates(&self) -> StayDates {
        self.dates
    }

    /// Returns the guest counts.
    #[must_use]
    pub const fn occupancy(&self) -> Occupancy {
        self.occupancy
    }

    /// Returns the confirmation code.
    #[must_use]
    pub const fn confirmation_code(&self) -> &ConfirmationCode {
        &self.confirmation_code
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> SystemTime {
        self.created_at
    }

    /// Returns a copy of this booking with the given persisted identifier.
    #[must_use]
    pub fn with_id(mut self, id: BookingId) -> Self {
        self.id = Some(id);
        self
    }
}

/// Builder for creating [`Booking`] instances.
#[derive(Debug)]
pub struct BookingBuilder {
    id: Option<BookingId>,
    user_id: UserId,
    room_id: RoomId,
    dates: StayDates,
    occupancy: Option<Occupancy>,
    confirmation_code: Option<ConfirmationCode>,
    created_at: Option<SystemTime>,
}

impl BookingBuilder {
    /// Sets the persisted identifier (used when loading from the store).
    #[must_use]
    pub const fn id(mut self, id: BookingId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the guest counts. Defaults to one adult.
    #[must_use]
    pub const fn occupancy(mut self, occupancy: Occupancy) -> Self {
        self.occupancy = Some(occupancy);
        self
    }

    /// Sets the confirmation code. A fresh code is generated if unset.
    #[must_use]
    pub fn confirmation_code(mut self, code: ConfirmationCode) -> Self {
        self.confirmation_code = Some(code);
        self
    }

    /// Sets the creation timestamp. Defaults to now.
    #[must_use]
    pub fn created_at(mut self, created_at: SystemTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Builds the booking.
    ///
    /// Date and occupancy validation happens when [`StayDates`] and
    /// [`Occupancy`] are constructed, so building itself cannot fail.
    #[must_use]
    pub fn build(self) -> Booking {
        Booking {
            id: self.id,
            user_id: self.user_id,
            room_id: self.room_id,
            dates: self.dates,
            occupancy: self.occupancy.unwrap_or_default(),
            confirmation_code: self
                .confirmation_code
                .unwrap_or_else(|| ConfirmationCode::generate(ConfirmationCode::DEFAULT_LENGTH)),
            created_at: self.created_at.unwrap_or_else(SystemTime::now),
        }
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
