//! Database CRUD operations for rooms.
//!
//! This module implements all create, read, update, and delete operations
//! for hotel room inventory in the database.

use rusqlite::{params, Connection, TransactionBehavior};

use crate::error::{EntityKind, Error, Result};
use crate::room::{PriceCents, Room, RoomId};

use super::connection::Database;

/// Helper function to deserialize a room from a database row.
///
/// Expects row fields in this order: id, `room_type`, `price_cents`,
/// description, `photo_url`
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

// SQL statements for room CRUD operations
const INSERT_ROOM: &str = r"
    INSERT INTO rooms (room_type, price_cents, description, photo_url)
    VALUES (?, ?, ?, ?)
";

const SELECT_ROOM: &str = r"
    SELECT id, room_type, price_cents, description, photo_url
    FROM rooms
    WHERE id = ?
";

const UPDATE_ROOM: &str = r"
    UPDATE rooms
    SET room_type = ?, price_cents = ?, description = ?, photo_url = ?
    WHERE id = ?
";

const DELETE_ROOM: &str = r"
    DELETE FROM rooms WHERE id = ?
";

const LIST_ROOMS: &str = r"
    SELECT id, room_type, price_cents, description, photo_url
    FROM rooms
    ORDER BY id
";

const SELECT_ROOM_TYPES: &str = r"
    SELECT DISTINCT room_type FROM rooms ORDER BY room_type
";

impl Database {
    /// Inserts a new room into the inventory.
    ///
    /// The room's identifier is assigned by the database and returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or insert fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use lodge::database::{Database, DatabaseConfig};
    /// use lodge::{PriceCents, Room};
    ///
    /// let config = DatabaseConfig::new("/tmp/lodge.db");
    /// let mut db = Database::open(config).unwrap();
    ///
    /// let room = Room::builder("Single", PriceCents::try_from(9900).unwrap())
    ///     .build()
    ///     .unwrap();
    /// let id = db.insert_room(&room).unwrap();
    /// println!("created room {id}");
    /// ```
    pub fn insert_room(&mut self, room: &Room) -> Result<RoomId> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            INSERT_ROOM,
            params![
                room.room_type(),
                room.price().value(),
                room.description(),
                room.photo_url(),
            ],
        )?;
        let id = RoomId::new(tx.last_insert_rowid());

        tx.commit()?;
        Ok(id)
    }

    /// Retrieves a room from the inventory.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    ///
    /// # Returns
    ///
    /// - `Ok(Some(room))` if the room exists
    /// - `Ok(None)` if the room doesn't exist
    /// - `Err(_)` if a database error occurs
    pub fn get_room(conn: &Connection, id: RoomId) -> Result<Option<Room>> {
        let mut stmt = conn.prepare(SELECT_ROOM)?;

        match stmt.query_row(params![id.value()], row_to_room) {
            Ok(room) => Ok(Some(room)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Updates an existing room with new field values.
    ///
    /// The room must carry a persisted identifier.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no room with the given identifier
    /// exists, or `Error::Validation` if the room has no identifier.
    pub fn update_room(&mut self, room: &Room) -> Result<()> {
        let id = room.id().ok_or_else(|| Error::Validation {
            field: "id".into(),
            message: "cannot update a room that has not been persisted".into(),
        })?;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let changed = tx.execute(
            UPDATE_ROOM,
            params![
                room.room_type(),
                room.price().value(),
                room.description(),
                room.photo_url(),
                id.value(),
            ],
        )?;

        if changed == 0 {
            return Err(Error::NotFound {
                entity: EntityKind::Room,
                id: id.value(),
            });
        }

        tx.commit()?;
        Ok(())
    }

    /// Deletes a room from the inventory.
    ///
    /// Bookings referencing the room are removed by the cascade rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or delete fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the room was found and deleted
    /// - `Ok(false)` if the room was not found
    pub fn delete_room(&mut self, id: RoomId) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let deleted = tx.execute(DELETE_ROOM, params![id.value()])?;
        tx.commit()?;

        Ok(deleted > 0)
    }

    /// Lists all rooms in the inventory, ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_rooms(conn: &Connection) -> Result<Vec<Room>> {
        let mut stmt = conn.prepare(LIST_ROOMS)?;
        let rooms = stmt
            .query_map([], row_to_room)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rooms)
    }

    /// Lists the distinct room categories present in the inventory.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn distinct_room_types(conn: &Connection) -> Result<Vec<String>> {
        let mut stmt = conn.prepare(SELECT_ROOM_TYPES)?;
        let types = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, create_test_room};

    #[test]
    fn test_insert_and_get_room() {
        let mut db = create_test_database();
        let room = create_test_room("Single", 9900);

        let id = db.insert_room(&room).unwrap();
        let fetched = Database::get_room(db.connection(), id).unwrap().unwrap();

        assert_eq!(fetched.id(), Some(id));
        assert_eq!(fetched.room_type(), "Single");
        assert_eq!(fetched.price().value(), 9900);
    }

    #[test]
    fn test_get_room_not_found() {
        let db = create_test_database();
        let result = Database::get_room(db.connection(), RoomId::new(999)).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let mut db = create_test_database();
        let first = db.insert_room(&create_test_room("Single", 9900)).unwrap();
        let second = db.insert_room(&create_test_room("Double", 14900)).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_update_room() {
        let mut db = create_test_database();
        let id = db.insert_room(&create_test_room("Single", 9900)).unwrap();

        let updated = Room::builder("Single Plus", PriceCents::try_from(10900).unwrap())
            .id(id)
            .description(Some("Renovated".to_string()))
            .build()
            .unwrap();
        db.update_room(&updated).unwrap();

        let fetched = Database::get_room(db.connection(), id).unwrap().unwrap();
        assert_eq!(fetched.room_type(), "Single Plus");
        assert_eq!(fetched.price().value(), 10900);
        assert_eq!(fetched.description(), Some("Renovated"));
    }

    #[test]
    fn test_update_room_not_found() {
        let mut db = create_test_database();
        let ghost = create_test_room("Single", 9900).with_id(RoomId::new(404));

        let result = db.update_room(&ghost);
        assert!(result.is_err());
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_update_room_without_id() {
        let mut db = create_test_database();
        let room = create_test_room("Single", 9900);

        let result = db.update_room(&room);
        assert!(result.is_err());
        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn test_delete_room() {
        let mut db = create_test_database();
        let id = db.insert_room(&create_test_room("Single", 9900)).unwrap();

        assert!(db.delete_room(id).unwrap());
        assert!(Database::get_room(db.connection(), id).unwrap().is_none());

        // Deleting again reports not found
        assert!(!db.delete_room(id).unwrap());
    }

    #[test]
    fn test_list_rooms_ordered() {
        let mut db = create_test_database();
        let first = db.insert_room(&create_test_room("Suite", 30000)).unwrap();
        let second = db.insert_room(&create_test_room("Single", 9900)).unwrap();

        let rooms = Database::list_rooms(db.connection()).unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].id(), Some(first));
        assert_eq!(rooms[1].id(), Some(second));
    }

    #[test]
    fn test_distinct_room_types() {
        let mut db = create_test_database();
        db.insert_room(&create_test_room("Double", 14900)).unwrap();
        db.insert_room(&create_test_room("Single", 9900)).unwrap();
        db.insert_room(&create_test_room("Single", 10900)).unwrap();

        let types = Database::distinct_room_types(db.connection()).unwrap();
        assert_eq!(types, vec!["Double".to_string(), "Single".to_string()]);
    }
}
