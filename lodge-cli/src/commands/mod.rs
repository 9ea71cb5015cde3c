//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Initialize the data directory and database
//! - `add_room` / `update_room` / `remove_room`: Manage the room inventory
//! - `list_rooms` / `room_types`: Inspect the room inventory
//! - `available`: Search rooms free over a date window
//! - `book`: Book a room for a guest
//! - `cancel`: Cancel a booking by id or confirmation code
//! - `find_booking`: Look up a booking by confirmation code
//! - `list_bookings`: List bookings with optional filters
//! - `register` / `list_users`: Manage user accounts
//! - `completions`: Generate shell completion scripts

pub mod add_room;
pub mod available;
pub mod book;
pub mod cancel;
pub mod completions;
pub mod find_booking;
pub mod init;
pub mod list_bookings;
pub mod list_rooms;
pub mod list_users;
pub mod register;
pub mod remove_room;
pub mod room_types;
pub mod update_room;

pub use add_room::AddRoomCommand;
pub use available::AvailableCommand;
pub use book::BookCommand;
pub use cancel::CancelCommand;
pub use completions::CompletionsCommand;
pub use find_booking::FindBookingCommand;
pub use init::InitCommand;
pub use list_bookings::ListBookingsCommand;
pub use list_rooms::ListRoomsCommand;
pub use list_users::ListUsersCommand;
pub use register::RegisterCommand;
pub use remove_room::RemoveRoomCommand;
pub use room_types::RoomTypesCommand;
pub use update_room::UpdateRoomCommand;
