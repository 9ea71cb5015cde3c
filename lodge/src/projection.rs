//! Serializable views over the entity graph.
//!
//! Rooms, bookings, and users reference each other cyclically in the
//! store (a user's bookings each name a room, a room's bookings each name
//! a user). Serialized output must be a tree, so each view constructor
//! fixes a root and expands at most one side of every relationship:
//! a booking nested under a user carries its room but never a user, and a
//! booking nested under a room carries neither. Nested entities are always
//! bare.
//!
//! Password hashes never appear in any view.

use chrono::NaiveDate;
use serde::Serialize;

use crate::booking::{Booking, BookingId};
use crate::room::{PriceCents, Room, RoomId};
use crate::user::{Role, User, UserId};

/// Serializable view of a room.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomView {
    /// Room identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RoomId>,
    /// Room category.
    pub room_type: String,
    /// Nightly price in cents.
    pub price_cents: PriceCents,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Photo reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Bookings for this room. Present only on booking-expanded views.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookings: Option<Vec<BookingView>>,
}

/// Serializable view of a booking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingView {
    /// Booking identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<BookingId>,
    /// Check-in date (first occupied night).
    pub check_in: NaiveDate,
    /// Check-out date (not occupied).
    pub check_out: NaiveDate,
    /// Number of adults.
    pub adults: u32,
    /// Number of children.
    pub children: u32,
    /// Derived total guest count.
    pub total_guests: u64,
    /// Confirmation code.
    pub confirmation_code: String,
    /// The booking's user. Present only when the view is rooted elsewhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserView>,
    /// The booked room. Present only when the view is rooted elsewhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<RoomView>,
}

/// Serializable view of a user.
///
/// The password hash is deliberately absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserView {
    /// User identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    /// Display name.
    pub name: String,
    /// Normalized email address.
    pub email: String,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Account role.
    pub role: Role,
    /// The user's bookings. Present only on booking-expanded views.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookings: Option<Vec<BookingView>>,
}

/// Projects a room without its bookings.
#[must_use]
pub fn room_view(room: &Room) -> RoomView {
    RoomView {
        id: room.id(),
        room_type: room.room_type().to_string(),
        price_cents: room.price(),
        description: room.description().map(str::to_string),
        photo_url: room.photo_url().map(str::to_string),
        bookings: None,
    }
}

/// Projects a booking without its user or room.
#[must_use]
pub fn booking_view(booking: &Booking) -> BookingView {
    BookingView {
        id: booking.id(),
        check_in: booking.dates().check_in(),
        check_out: booking.dates().check_out(),
        adults: booking.occupancy().adults(),
        children: booking.occupancy().children(),
        total_guests: booking.occupancy().total(),
        confirmation_code: booking.confirmation_code().as_str().to_string(),
        user: None,
        room: None,
    }
}

/// Projects a user without their bookings.
#[must_use]
pub fn user_view(user: &User) -> UserView {
    UserView {
        id: user.id(),
        name: user.name().to_string(),
        email: user.email().to_string(),
        phone: user.phone().map(str::to_string),
        role: user.role(),
        bookings: None,
    }
}

/// Projects a room with its bookings.
///
/// Nested bookings are bare: they carry neither user nor room, since the
/// room is the root of this view. An empty slice projects to an empty
/// list, not an absent one.
#[must_use]
pub fn room_with_bookings(room: &Room, bookings: &[Booking]) -> RoomView {
    let mut view = room_view(room);
    view.bookings = Some(bookings.iter().map(booking_view).collect());
    view
}

/// Projects a booking with its user expanded (bare) and no room.
#[must_use]
pub fn booking_with_user(booking: &Booking, user: &User) -> BookingView {
    let mut view = booking_view(booking);
    view.user = Some(user_view(user));
    view
}

/// Projects a booking with its room expanded (bare) and no user.
#[must_use]
pub fn booking_with_room(booking: &Booking, room: &Room) -> BookingView {
    let mut view = booking_view(booking);
    view.room = Some(room_view(room));
    view
}

/// Projects a user with their bookings, each booking carrying its room.
///
/// The nested rooms are bare (no bookings list) and the nested bookings
/// carry no user, so the projection is a tree no matter how entangled the
/// underlying graph is. Bookings whose room has been deleted are
/// projected without a room.
#[must_use]
pub fn user_with_bookings(user: &User, bookings: &[(Booking, Option<Room>)]) -> UserView {
    let mut view = user_view(user);
    view.bookings = Some(
        bookings
            .iter()
            .map(|(booking, room)| match room {
                Some(room) => booking_with_room(booking, room),
                None => booking_view(booking),
            })
            .collect(),
    );
    view
}
