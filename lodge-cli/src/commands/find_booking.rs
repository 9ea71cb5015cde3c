//! Find-booking command implementation.

use std::io::Write;

use clap::Args;

use lodge::projection::{booking_view, booking_with_room, booking_with_user};
use lodge::Database;

use crate::error::CliError;
use crate::utils::{
    format_timestamp, json_error, load_configuration, open_database, GlobalOptions, OutputFormat,
};

/// Look up a booking by confirmation code.
#[derive(Args)]
pub struct FindBookingCommand {
    /// Confirmation code
    #[arg(value_name = "CODE")]
    pub code: String,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "LODGE_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Show the guest holding the booking instead of the room
    #[arg(long)]
    pub guest: bool,
}

impl FindBookingCommand {
    /// Execute the find-booking command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let booking = Database::find_booking_by_code(db.connection(), &self.code)
            .map_err(CliError::from)?
            .ok_or_else(|| {
                CliError::SemanticFailure(format!("No booking with confirmation code {}", self.code))
            })?;

        let view = if self.guest {
            let user =
                Database::get_user(db.connection(), booking.user_id()).map_err(CliError::from)?;
            match user {
                Some(ref user) => booking_with_user(&booking, user),
                None => booking_view(&booking),
            }
        } else {
            let room =
                Database::get_room(db.connection(), booking.room_id()).map_err(CliError::from)?;
            match room {
                Some(ref room) => booking_with_room(&booking, room),
                None => booking_view(&booking),
            }
        };

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut handle, &view).map_err(json_error)?;
                writeln!(handle)?;
            }
            // Table and CSV collapse to the same single-record summary
            OutputFormat::Table | OutputFormat::Csv => {
                writeln!(handle, "Confirmation: {}", view.confirmation_code)?;
                if let Some(ref user) = view.user {
                    writeln!(handle, "Guest:        {} <{}>", user.name, user.email)?;
                }
                if let Some(ref room) = view.room {
                    writeln!(
                        handle,
                        "Room:         {} ({})",
                        booking.room_id(),
                        room.room_type
                    )?;
                } else if !self.guest {
                    writeln!(handle, "Room:         {} (removed)", booking.room_id())?;
                }
                writeln!(handle, "Check-in:     {}", view.check_in)?;
                writeln!(handle, "Check-out:    {}", view.check_out)?;
                writeln!(
                    handle,
                    "Guests:       {} adult(s), {} child(ren)",
                    view.adults, view.children
                )?;
                writeln!(
                    handle,
                    "Created:      {}",
                    format_timestamp(booking.created_at())
                )?;
            }
        }

        Ok(())
    }
}
