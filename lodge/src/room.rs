//! Room types for hotel inventory.
//!
//! This module provides the [`Room`] entity along with its identifier and
//! price value types, including validation and builder patterns for
//! construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::booking::ValidationError;

/// A unique identifier for a room.
///
/// # Examples
///
/// ```
/// use lodge::RoomId;
///
/// let id = RoomId::new(7);
/// assert_eq!(id.value(), 7);
/// assert_eq!(format!("{id}"), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(i64);

impl RoomId {
    /// Creates a room identifier from a raw database id.
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

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-negative room price in minor currency units (cents).
///
/// Prices are stored as integer cents rather than floating point to keep
/// arithmetic exact.
///
/// # Examples
///
/// ```
/// use lodge::PriceCents;
///
/// let price = PriceCents::try_from(12500).unwrap();
/// assert_eq!(price.value(), 12500);
/// assert_eq!(format!("{price}"), "125.00");
///
/// assert!(PriceCents::try_from(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceCents(i64);

impl PriceCents {
    /// Returns the price in cents.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for PriceCents {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            Err(ValidationError {
                field: "price".into(),
                message: format!("price must not be negative, got {value}"),
            })
        } else {
            Ok(Self(value))
        }
    }
}

impl fmt::Display for PriceCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// A hotel room.
///
/// Rooms carry a category string ("Single", "Double Deluxe", ...), a price,
/// a free-form description, and an optional photo reference. A room does not
/// own its bookings; bookings reference the room they are booked into.
///
/// # Examples
///
/// ```
/// use lodge::{PriceCents, Room};
///
/// let room = Room::builder("Double Deluxe", PriceCents::try_from(18900).unwrap())
///     .description(Some("Sea view, king bed".to_string()))
///     .build()
///     .unwrap();
///
/// assert_eq!(room.room_type(), "Double Deluxe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    id: Option<RoomId>,
    room_type: String,
    price: PriceCents,
    description: Option<String>,
    photo_url: Option<String>,
}

impl Room {
    /// Creates a new room builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodge::{PriceCents, Room};
    ///
    /// let room = Room::builder("Single", PriceCents::try_from(9900).unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder(room_type: impl Into<String>, price: PriceCents) -> RoomBuilder {
        RoomBuilder {
            id: None,
            room_type: room_type.into(),
            price,
            description: None,
            photo_url: None,
        }
    }

    /// Returns the room identifier, if the room has been persisted.
    #[must_use]
    pub const fn id(&self) -> Option<RoomId> {
        self.id
    }

    /// Returns the room category.
    #[must_use]
    pub fn room_type(&self) -> &str {
        &self.room_type
    }

    /// Returns the nightly price.
    #[must_use]
    pub const fn price(&self) -> PriceCents {
        self.price
    }

    /// Returns the free-form description, if set.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the photo reference, if set.
    #[must_use]
    pub fn photo_url(&self) -> Option<&str> {
        self.photo_url.as_deref()
    }

    /// Returns a copy of this room with the given persisted identifier.
    #[must_use]
    pub fn with_id(mut self, id: RoomId) -> Self {
        self.id = Some(id);
        self
    }
}

/// Builder for creating [`Room`] instances.
#[derive(Debug)]
pub struct RoomBuilder {
    id: Option<RoomId>,
    room_type: String,
    price: PriceCents,
    description: Option<String>,
    photo_url: Option<String>,
}

impl RoomBuilder {
    /// Sets the persisted identifier (used when loading from the store).
    #[must_use]
    pub const fn id(mut self, id: RoomId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the description.
    ///
    /// The description will be trimmed of leading/trailing whitespace.
    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description.map(|d| d.trim().to_string());
        self
    }

    /// Sets the photo reference.
    #[must_use]
    pub fn photo_url(mut self, photo_url: Option<String>) -> Self {
        self.photo_url = photo_url;
        self
    }

    /// Builds the room.
    ///
    /// # Errors
    ///
    /// Returns an error if the room type is empty after trimming whitespace,
    /// or if a description was provided but is empty after trimming.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodge::{PriceCents, Room};
    ///
    /// let price = PriceCents::try_from(9900).unwrap();
    ///
    /// assert!(Room::builder("Single", price).build().is_ok());
    /// assert!(Room::builder("   ", price).build().is_err());
    /// ```
    pub fn build(self) -> Result<Room, ValidationError> {
        let room_type = self.room_type.trim().to_string();
        if room_type.is_empty() {
            return Err(ValidationError {
                field: "room_type".into(),
                message: "room type must be non-empty after trimming whitespace".into(),
            });
        }

        if let Some(ref description) = self.description {
            if description.is_empty() {
                return Err(ValidationError {
                    field: "description".into(),
                    message: "description must be non-empty after trimming whitespace".into(),
                });
            }
        }

        Ok(Room {
            id: self.id,
            room_type,
            price: self.price,
            description: self.description,
            photo_url: self.photo_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(cents: i64) -> PriceCents {
        PriceCents::try_from(cents).unwrap()
    }

    #[test]
    fn test_price_rejects_negative() {
        let result = PriceCents::try_from(-100);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.field, "price");
    }

    #[test]
    fn test_price_zero_is_valid() {
        assert_eq!(price(0).value(), 0);
    }

    #[test]
    fn test_price_display() {
        assert_eq!(format!("{}", price(12500)), "125.00");
        assert_eq!(format!("{}", price(9)), "0.09");
        assert_eq!(format!("{}", price(150)), "1.50");
    }

    #[test]
    fn test_room_builder_basic() {
        let room = Room::builder("Single", price(9900)).build().unwrap();
        assert_eq!(room.id(), None);
        assert_eq!(room.room_type(), "Single");
        assert_eq!(room.price().value(), 9900);
        assert_eq!(room.description(), None);
        assert_eq!(room.photo_url(), None);
    }

    #[test]
    fn test_room_builder_full() {
        let room = Room::builder("Double Deluxe", price(18900))
            .description(Some("Sea view".to_string()))
            .photo_url(Some("https://img.example/room.jpg".to_string()))
            .build()
            .unwrap();
        assert_eq!(room.description(), Some("Sea view"));
        assert_eq!(room.photo_url(), Some("https://img.example/room.jpg"));
    }

    #[test]
    fn test_room_builder_trims_type() {
        let room = Room::builder("  Suite  ", price(30000)).build().unwrap();
        assert_eq!(room.room_type(), "Suite");
    }

    #[test]
    fn test_room_builder_empty_type() {
        let result = Room::builder("   ", price(9900)).build();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().field, "room_type");
    }

    #[test]
    fn test_room_builder_empty_description() {
        let result = Room::builder("Single", price(9900))
            .description(Some("   ".to_string()))
            .build();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().field, "description");
    }

    #[test]
    fn test_room_with_id() {
        let room = Room::builder("Single", price(9900))
            .build()
            .unwrap()
            .with_id(RoomId::new(3));
        assert_eq!(room.id(), Some(RoomId::new(3)));
    }

    #[test]
    fn test_room_serde_round_trip() {
        let room = Room::builder("Suite", price(30000))
            .id(RoomId::new(1))
            .description(Some("Top floor".to_string()))
            .build()
            .unwrap();
        let json = serde_json::to_string(&room).unwrap();
        let back: Room = serde_json::from_str(&json).unwrap();
        assert_eq!(back, room);
    }
}
