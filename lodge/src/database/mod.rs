//! Database layer for persistent storage of rooms, users, and bookings.
//!
//! This module provides a SQLite-based storage layer for the reservation
//! system, including connection management, schema versioning, and CRUD
//! operations for each entity.
//!
//! # Examples
//!
//! ```no_run
//! use lodge::database::{Database, DatabaseConfig};
//! use lodge::{PriceCents, Room};
//!
//! // Open a database
//! let config = DatabaseConfig::new("/tmp/lodge.db");
//! let mut db = Database::open(config).unwrap();
//!
//! // Add a room to the inventory
//! let room = Room::builder("Double", PriceCents::try_from(14900).unwrap())
//!     .build()
//!     .unwrap();
//! let id = db.insert_room(&room).unwrap();
//!
//! // List all rooms
//! let all = Database::list_rooms(db.connection()).unwrap();
//! for room in all {
//!     println!("{room:?}");
//! }
//! ```

mod bookings;
mod config;
mod connection;
pub mod migrations;
mod rooms;
mod schema;
pub(crate) mod users;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{default_data_dir, resolve_database_path, DatabaseConfig};
pub use connection::Database;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
