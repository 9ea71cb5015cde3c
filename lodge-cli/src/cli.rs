//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{
    AddRoomCommand, AvailableCommand, BookCommand, CancelCommand, CompletionsCommand,
    FindBookingCommand, InitCommand, ListBookingsCommand, ListRoomsCommand, ListUsersCommand,
    RegisterCommand, RemoveRoomCommand, RoomTypesCommand, UpdateRoomCommand,
};

/// Command-line tool for managing hotel rooms and reservations.
#[derive(Parser)]
#[command(name = "lodge")]
#[command(version, about = "Manage hotel rooms and reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "LODGE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "LODGE_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "LODGE_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize lodge data directory and database
    Init(InitCommand),

    /// Add a room to the inventory
    AddRoom(AddRoomCommand),

    /// Update a room's details
    UpdateRoom(UpdateRoomCommand),

    /// Remove a room (cancels its bookings)
    RemoveRoom(RemoveRoomCommand),

    /// List rooms in the inventory
    ListRooms(ListRoomsCommand),

    /// List distinct room categories
    RoomTypes(RoomTypesCommand),

    /// Search rooms available over a date window
    Available(AvailableCommand),

    /// Book a room for a guest
    Book(BookCommand),

    /// Cancel a booking
    Cancel(CancelCommand),

    /// Look up a booking by confirmation code
    FindBooking(FindBookingCommand),

    /// List bookings
    ListBookings(ListBookingsCommand),

    /// Register a user account
    Register(RegisterCommand),

    /// List registered users
    ListUsers(ListUsersCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
