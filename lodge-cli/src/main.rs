//! Main entry point for the lodge CLI.
//!
//! This is the command-line interface for the lodge reservation system.
//! It provides commands for managing hotel inventory and bookings:
//! - `add-room` / `update-room` / `remove-room`: Manage the room inventory
//! - `available`: Search rooms free over a date window
//! - `book` / `cancel`: Create and cancel reservations
//! - `register`: Create user accounts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;

use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = lodge::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::AddRoom(cmd) => cmd.execute(&global),
        cli::Command::UpdateRoom(cmd) => cmd.execute(&global),
        cli::Command::RemoveRoom(cmd) => cmd.execute(&global),
        cli::Command::ListRooms(cmd) => cmd.execute(&global),
        cli::Command::RoomTypes(cmd) => cmd.execute(&global),
        cli::Command::Available(cmd) => cmd.execute(&global),
        cli::Command::Book(cmd) => cmd.execute(&global),
        cli::Command::Cancel(cmd) => cmd.execute(&global),
        cli::Command::FindBooking(cmd) => cmd.execute(&global),
        cli::Command::ListBookings(cmd) => cmd.execute(&global),
        cli::Command::Register(cmd) => cmd.execute(&global),
        cli::Command::ListUsers(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
