//! High-level reservation operations.
//!
//! This module implements the business operations on top of the database
//! layer: booking creation with its commit-time availability recheck,
//! cancellation, room inventory management, user registration, and data
//! directory initialization.
//!
//! # Examples
//!
//! ```no_run
//! use lodge::config::ConfigBuilder;
//! use lodge::database::{Database, DatabaseConfig};
//! use lodge::operations::{create_booking, BookingRequest};
//! use lodge::{RoomId, StayDates, UserId};
//! use chrono::NaiveDate;
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/lodge.db")).unwrap();
//! let config = ConfigBuilder::new().build().unwrap();
//!
//! let dates = StayDates::new(
//!     NaiveDate::from_ymd_opt(2030, 6, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2030, 6, 5).unwrap(),
//! ).unwrap();
//!
//! let request = BookingRequest::new(UserId::new(1), RoomId::new(2), dates);
//! let booking = create_booking(&mut db, &config, &request).unwrap();
//! println!("confirmed: {}", booking.confirmation_code());
//! ```

pub mod book;
pub mod cancel;
pub mod init;
pub mod register;
pub mod rooms;

pub use book::{
    create_booking, create_booking_with_clock, BookingRequest, Clock, SystemClock,
};
pub use cancel::{cancel_booking, cancel_booking_by_code};
pub use init::{init_database, InitOptions, InitResult};
pub use register::{booking_history, find_user, register_user, RegisterRequest};
pub use rooms::{add_room, remove_room, update_room, RoomUpdate};
