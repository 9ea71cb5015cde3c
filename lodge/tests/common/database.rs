//! Shared database test utilities.

use std::path::PathBuf;

use lodge::database::{Database, DatabaseConfig};
use lodge::{PriceCents, Room, RoomId, User, UserId};

/// Creates a temporary test database that will be cleaned up when dropped.
///
/// Returns the database instance. The temporary directory is tied to the
/// database's lifetime through the test.
#[allow(dead_code)]
pub fn create_test_database() -> Database {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Creates a database file path that outlives this call, so several
/// connections can be opened against the same store.
#[allow(dead_code)]
pub fn create_shared_database_path() -> PathBuf {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shared.db");
    std::mem::forget(dir);
    path
}

/// Inserts a room with the given category and a fixed price, returning its id.
#[allow(dead_code)]
pub fn seed_room(db: &mut Database, room_type: &str) -> RoomId {
    let room = Room::builder(room_type, PriceCents::try_from(15000).unwrap())
        .build()
        .unwrap();
    db.insert_room(&room).unwrap()
}

/// Registers a user with the given name and email, returning their id.
#[allow(dead_code)]
pub fn seed_user(db: &mut Database, name: &str, email: &str) -> UserId {
    let user = User::builder(name, email, "integration-hash")
        .build()
        .unwrap();
    db.insert_user(&user).unwrap()
}
