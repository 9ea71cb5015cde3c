//! Integration tests for the database layer.

mod common;

use common::database::{create_shared_database_path, create_test_database, seed_room, seed_user};
use common::stay;

use lodge::database::{migrations, Database, DatabaseConfig};
use lodge::operations::{create_booking_with_clock, BookingRequest};
use lodge::{Config, Room};

use common::FixedClock;

#[test]
fn test_data_persists_across_reopen() {
    let path = create_shared_database_path();

    let room_id = {
        let mut db = Database::open(DatabaseConfig::new(&path)).unwrap();
        seed_room(&mut db, "Suite")
    };

    let db = Database::open(DatabaseConfig::new(&path)).unwrap();
    let room = Database::get_room(db.connection(), room_id).unwrap().unwrap();
    assert_eq!(room.room_type(), "Suite");

    let version = migrations::get_schema_version(db.connection()).unwrap();
    assert_eq!(version, 1);
}

#[test]
fn test_read_only_connection_can_query() {
    let path = create_shared_database_path();

    let room_id = {
        let mut db = Database::open(DatabaseConfig::new(&path)).unwrap();
        seed_room(&mut db, "Single")
    };

    let db = Database::open(DatabaseConfig::new(&path).read_only()).unwrap();
    let room = Database::get_room(db.connection(), room_id).unwrap().unwrap();
    assert_eq!(room.room_type(), "Single");
}

#[test]
fn test_deleting_room_cascades_to_bookings() {
    let mut db = create_test_database();
    let config = Config::default();
    let clock = FixedClock::spring_2024();

    let room_id = seed_room(&mut db, "Single");
    let user_id = seed_user(&mut db, "Ada Lovelace", "ada@example.com");

    let request = BookingRequest::new(user_id, room_id, stay("2024-06-01", "2024-06-05"));
    let booking = create_booking_with_clock(&mut db, &config, &request, &clock).unwrap();

    assert!(db.delete_room(room_id).unwrap());

    let gone = Database::get_booking(db.connection(), booking.id().unwrap()).unwrap();
    assert!(gone.is_none(), "bookings should be removed with their room");

    // The user is untouched
    let user = Database::get_user(db.connection(), user_id).unwrap();
    assert!(user.is_some());
}

#[test]
fn test_bookings_listed_in_stay_order() {
    let mut db = create_test_database();
    let config = Config::default();
    let clock = FixedClock::spring_2024();

    let room_id = seed_room(&mut db, "Single");
    let user_id = seed_user(&mut db, "Ada Lovelace", "ada@example.com");

    // Insert out of calendar order
    for window in [
        stay("2024-06-10", "2024-06-12"),
        stay("2024-06-01", "2024-06-05"),
        stay("2024-06-05", "2024-06-08"),
    ] {
        let request = BookingRequest::new(user_id, room_id, window);
        create_booking_with_clock(&mut db, &config, &request, &clock).unwrap();
    }

    let by_room = Database::bookings_for_room(db.connection(), room_id).unwrap();
    let check_ins: Vec<_> = by_room
        .iter()
        .map(|b| b.dates().check_in().to_string())
        .collect();
    assert_eq!(check_ins, vec!["2024-06-01", "2024-06-05", "2024-06-10"]);

    let by_user = Database::bookings_for_user(db.connection(), user_id).unwrap();
    assert_eq!(by_user.len(), 3);
}

#[test]
fn test_room_listing_and_types() {
    let mut db = create_test_database();
    seed_room(&mut db, "Single");
    seed_room(&mut db, "Single");
    seed_room(&mut db, "Double Deluxe");

    let rooms = Database::list_rooms(db.connection()).unwrap();
    assert_eq!(rooms.len(), 3);
    assert!(rooms.iter().all(|r| r.id().is_some()));

    let types = Database::distinct_room_types(db.connection()).unwrap();
    assert_eq!(types, vec!["Double Deluxe".to_string(), "Single".to_string()]);
}

#[test]
fn test_update_room_round_trip() {
    let mut db = create_test_database();
    let room_id = seed_room(&mut db, "Single");

    let updated = Room::builder("Renovated Single", lodge::PriceCents::try_from(17500).unwrap())
        .id(room_id)
        .description(Some("Fresh paint".to_string()))
        .build()
        .unwrap();
    db.update_room(&updated).unwrap();

    let room = Database::get_room(db.connection(), room_id).unwrap().unwrap();
    assert_eq!(room.room_type(), "Renovated Single");
    assert_eq!(room.description(), Some("Fresh paint"));
}
