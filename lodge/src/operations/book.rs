//! Booking creation.
//!
//! Creating a booking is the only operation that must be atomic across a
//! read and a write: availability is re-checked inside the same immediate
//! transaction that inserts the row, so two concurrent requests for an
//! overlapping window on the same room cannot both succeed.

use chrono::NaiveDate;

use crate::booking::{Booking, Occupancy, StayDates};
use crate::config::Config;
use crate::confirmation::ConfirmationCode;
use crate::database::users::is_unique_violation;
use crate::database::Database;
use crate::error::{EntityKind, Error, Result};
use crate::room::RoomId;
use crate::user::UserId;

use rusqlite::TransactionBehavior;

/// A source of "today" for date validation.
///
/// Production code uses [`SystemClock`]; tests substitute a fixed date so
/// past-stay validation is deterministic.
pub trait Clock {
    /// Returns the current local date.
    fn today(&self) -> NaiveDate;
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Options for a booking request.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lodge::operations::BookingRequest;
/// use lodge::{Occupancy, RoomId, StayDates, UserId};
///
/// let dates = StayDates::new(
///     NaiveDate::from_ymd_opt(2030, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2030, 6, 5).unwrap(),
/// ).unwrap();
///
/// let request = BookingRequest::new(UserId::new(1), RoomId::new(2), dates)
///     .with_occupancy(Occupancy::new(2, 1).unwrap());
/// assert_eq!(request.occupancy.total(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct BookingRequest {
    /// The user making the reservation.
    pub user_id: UserId,

    /// The room being reserved.
    pub room_id: RoomId,

    /// The requested stay interval.
    pub dates: StayDates,

    /// Guest counts. Defaults to one adult.
    pub occupancy: Occupancy,
}

impl BookingRequest {
    /// Creates a new booking request with a default occupancy of one adult.
    #[must_use]
    pub fn new(user_id: UserId, room_id: RoomId, dates: StayDates) -> Self {
        Self {
            user_id,
            room_id,
            dates,
            occupancy: Occupancy::default(),
        }
    }

    /// Sets the guest counts.
    #[must_use]
    pub const fn with_occupancy(mut self, occupancy: Occupancy) -> Self {
        self.occupancy = occupancy;
        self
    }
}

/// Creates a booking, using the system clock for past-stay validation.
///
/// See [`create_booking_with_clock`] for the full contract.
///
/// # Errors
///
/// Same as [`create_booking_with_clock`].
pub fn create_booking(
    db: &mut Database,
    config: &Config,
    request: &BookingRequest,
) -> Result<Booking> {
    create_booking_with_clock(db, config, request, &SystemClock)
}

/// Creates a booking with an explicit clock.
///
/// The operation:
/// 1. Rejects stays that have already ended as of `clock.today()`
/// 2. Opens an immediate transaction
/// 3. Verifies the room and user exist
/// 4. Re-checks availability with half-open overlap semantics
/// 5. Inserts the booking, regenerating the confirmation code if it
///    collides with an existing one
///
/// The availability check and the insert run in the same transaction, so
/// of two racing requests for conflicting windows exactly one commits.
///
/// # Errors
///
/// - `Error::Validation` if the stay ends in the past
/// - `Error::NotFound` if the room or user does not exist
/// - `Error::AvailabilityConflict` if the room is booked for an
///   overlapping window
/// - `Error::Transient` if every confirmation code attempt collided
pub fn create_booking_with_clock(
    db: &mut Database,
    config: &Config,
    request: &BookingRequest,
    clock: &dyn Clock,
) -> Result<Booking> {
    let today = clock.today();
    if request.dates.check_out() <= today {
        return Err(Error::Validation {
            field: "check_out".into(),
            message: format!(
                "stay {} has already ended as of {today}",
                request.dates
            ),
        });
    }

    let tx = db
        .connection_mut()
        .transaction_with_behavior(TransactionBehavior::Immediate)?;

    if Database::get_room(&tx, request.room_id)?.is_none() {
        return Err(Error::NotFound {
            entity: EntityKind::Room,
            id: request.room_id.value(),
        });
    }
    if Database::get_user(&tx, request.user_id)?.is_none() {
        return Err(Error::NotFound {
            entity: EntityKind::User,
            id: request.user_id.value(),
        });
    }

    let overlapping = Database::count_overlapping_bookings(&tx, request.room_id, &request.dates)?;
    if overlapping > 0 {
        return Err(Error::AvailabilityConflict {
            room_id: request.room_id,
            check_in: request.dates.check_in(),
            check_out: request.dates.check_out(),
        });
    }

    // Codes are random, so a UNIQUE collision just means "draw again".
    let attempts = config.code_attempts();
    for attempt in 1..=attempts {
        let booking = Booking::builder(request.user_id, request.room_id, request.dates)
            .occupancy(request.occupancy)
            .confirmation_code(ConfirmationCode::generate(config.code_length()))
            .build();

        match Database::insert_booking_raw(&tx, &booking) {
            Ok(id) => {
                tx.commit()?;
                return Ok(booking.with_id(id));
            }
            Err(ref e) if is_unique_violation(e) => {
                log::debug!(
                    "confirmation code collision on attempt {attempt} of {attempts}, retrying"
                );
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(Error::Transient {
        reason: format!("could not generate a unique confirmation code after {attempts} attempts"),
    })
}
