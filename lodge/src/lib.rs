#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # lodge
//!
//! A library for managing hotel room availability and reservations.
//!
//! This library provides core types and functionality for tracking rooms,
//! guests, and bookings, with conflict-free reservation of rooms over
//! half-open date intervals.
//!
//! ## Core Types
//!
//! - [`Room`] and [`PriceCents`]: Hotel inventory types with validation
//! - [`Booking`], [`StayDates`], and [`Occupancy`]: Reservation tracking
//! - [`User`] and [`Role`]: Guest and staff accounts
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use lodge::StayDates;
//!
//! // A stay occupies its check-in night but not its check-out day,
//! // so back-to-back stays never conflict.
//! let first = StayDates::new(
//!     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
//! )
//! .unwrap();
//! let second = StayDates::new(
//!     NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 6, 8).unwrap(),
//! )
//! .unwrap();
//!
//! assert_eq!(first.nights(), 4);
//! assert!(!first.overlaps(&second));
//! ```

pub mod availability;
pub mod booking;
pub mod config;
pub mod confirmation;
pub mod database;
pub mod error;
pub mod logging;
pub mod operations;
pub mod projection;
pub mod room;
pub mod user;

// Re-export key types at crate root for convenience
pub use booking::{Booking, BookingId, Occupancy, StayDates, ValidationError};
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use confirmation::ConfirmationCode;
pub use database::{Database, DatabaseConfig};
pub use error::{EntityKind, Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    add_room, booking_history, cancel_booking, cancel_booking_by_code, create_booking, find_user,
    init_database, register_user, remove_room, update_room, BookingRequest, InitOptions,
    InitResult, RegisterRequest, RoomUpdate,
};
pub use projection::{
    booking_view, booking_with_room, booking_with_user, room_view, room_with_bookings, user_view,
    user_with_bookings, BookingView, RoomView, UserView,
};
pub use room::{PriceCents, Room, RoomId};
pub use user::{Role, User, UserId};
