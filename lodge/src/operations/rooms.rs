//! Room inventory management.
//!
//! Adding, updating, and removing rooms. Updates are partial: unset fields
//! keep their stored value, so a price change does not have to restate the
//! description.

use crate::database::Database;
use crate::error::{EntityKind, Error, Result};
use crate::room::{PriceCents, Room, RoomId};

/// A partial update to a room.
///
/// Fields left as `None` keep the room's current value. To clear the
/// description or photo, set the field to `Some(None)`.
///
/// # Examples
///
/// ```
/// use lodge::operations::RoomUpdate;
/// use lodge::PriceCents;
///
/// let update = RoomUpdate::new()
///     .with_price(PriceCents::try_from(11900).unwrap())
///     .with_description(Some("Refurbished".to_string()));
/// assert!(update.room_type.is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoomUpdate {
    /// New room category, if changing.
    pub room_type: Option<String>,

    /// New nightly price, if changing.
    pub price: Option<PriceCents>,

    /// New description: `Some(None)` clears it, `None` keeps it.
    pub description: Option<Option<String>>,

    /// New photo reference: `Some(None)` clears it, `None` keeps it.
    pub photo_url: Option<Option<String>>,
}

impl RoomUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a new room category.
    #[must_use]
    pub fn with_room_type(mut self, room_type: impl Into<String>) -> Self {
        self.room_type = Some(room_type.into());
        self
    }

    /// Sets a new nightly price.
    #[must_use]
    pub const fn with_price(mut self, price: PriceCents) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets or clears the description.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    /// Sets or clears the photo reference.
    #[must_use]
    pub fn with_photo_url(mut self, photo_url: Option<String>) -> Self {
        self.photo_url = Some(photo_url);
        self
    }

    /// Returns whether the update changes anything.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.room_type.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.photo_url.is_none()
    }
}

/// Adds a room to the inventory.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn add_room(db: &mut Database, room: &Room) -> Result<Room> {
    let id = db.insert_room(room)?;
    Ok(room.clone().with_id(id))
}

/// Applies a partial update to a room.
///
/// Returns the room as stored after the update.
///
/// # Errors
///
/// Returns `Error::NotFound` if the room does not exist, or
/// `Error::Validation` if the updated fields fail validation (for example
/// an empty room type).
pub fn update_room(db: &mut Database, id: RoomId, update: &RoomUpdate) -> Result<Room> {
    let current = Database::get_room(db.connection(), id)?.ok_or(Error::NotFound {
        entity: EntityKind::Room,
        id: id.value(),
    })?;

    if update.is_empty() {
        return Ok(current);
    }

    let room_type = update
        .room_type
        .clone()
        .unwrap_or_else(|| current.room_type().to_string());
    let price = update.price.unwrap_or_else(|| current.price());
    let description = match &update.description {
        Some(new) => new.clone(),
        None => current.description().map(str::to_string),
    };
    let photo_url = match &update.photo_url {
        Some(new) => new.clone(),
        None => current.photo_url().map(str::to_string),
    };

    let updated = Room::builder(room_type, price)
        .id(id)
        .description(description)
        .photo_url(photo_url)
        .build()?;

    db.update_room(&updated)?;
    Ok(updated)
}

/// Removes a room from the inventory.
///
/// Bookings for the room are removed with it.
///
/// # Errors
///
/// Returns `Error::NotFound` if the room does not exist.
pub fn remove_room(db: &mut Database, id: RoomId) -> Result<()> {
    if !db.delete_room(id)? {
        return Err(Error::NotFound {
            entity: EntityKind::Room,
            id: id.value(),
        });
    }
    Ok(())
}
