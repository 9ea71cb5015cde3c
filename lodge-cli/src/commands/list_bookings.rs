//! List-bookings command implementation.
//!
//! This module implements the `list-bookings` command, which displays
//! bookings in various formats, optionally filtered by room or user.

use std::io::Write;

use clap::Args;

use lodge::operations::booking_history;
use lodge::projection::{booking_view, room_with_bookings};
use lodge::{Booking, Database, RoomId, UserId};

use crate::error::CliError;
use crate::utils::{
    csv_error, format_timestamp, json_error, load_configuration, open_database, GlobalOptions,
    OutputFormat,
};

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 8] = [
    "id",
    "room_id",
    "user_id",
    "check_in",
    "check_out",
    "guests",
    "confirmation_code",
    "created_at",
];

/// List bookings.
#[derive(Args)]
pub struct ListBookingsCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "LODGE_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Only bookings for this room
    #[arg(long, value_name = "ROOM_ID", conflicts_with = "user")]
    pub room: Option<i64>,

    /// Only bookings for this user
    #[arg(long, value_name = "USER_ID")]
    pub user: Option<i64>,
}

impl ListBookingsCommand {
    /// Execute the list-bookings command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        // JSON output with a filter renders the filtered entity as the
        // root, with its bookings nested beneath it.
        if matches!(self.format, OutputFormat::Json) {
            if let Some(user) = self.user.filter(|_| self.room.is_none()) {
                let view = booking_history(&db, UserId::new(user)).map_err(CliError::from)?;

                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                serde_json::to_writer_pretty(&mut handle, &view).map_err(json_error)?;
                writeln!(handle)?;
                return Ok(());
            }
            if let Some(room) = self.room {
                let room_id = RoomId::new(room);
                let room = Database::get_room(db.connection(), room_id)
                    .map_err(CliError::from)?
                    .ok_or_else(|| {
                        CliError::SemanticFailure(format!("No room with id {room_id}"))
                    })?;
                let bookings = Database::bookings_for_room(db.connection(), room_id)
                    .map_err(CliError::from)?;
                let view = room_with_bookings(&room, &bookings);

                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                serde_json::to_writer_pretty(&mut handle, &view).map_err(json_error)?;
                writeln!(handle)?;
                return Ok(());
            }
        }

        let bookings = match (self.room, self.user) {
            (Some(room), _) => Database::bookings_for_room(db.connection(), RoomId::new(room)),
            (None, Some(user)) => Database::bookings_for_user(db.connection(), UserId::new(user)),
            (None, None) => Database::list_bookings(db.connection()),
        }
        .map_err(CliError::from)?;

        match self.format {
            OutputFormat::Table => format_as_table(&bookings)?,
            OutputFormat::Json => format_as_json(&bookings)?,
            OutputFormat::Csv => format_as_csv(&bookings)?,
        }

        Ok(())
    }
}

/// Format bookings as a human-readable table.
fn format_as_table(bookings: &[Booking]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for booking in bookings {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            booking
                .id()
                .map_or_else(|| "-".to_string(), |id| id.to_string()),
            booking.room_id(),
            booking.user_id(),
            booking.dates().check_in(),
            booking.dates().check_out(),
            booking.occupancy().total(),
            booking.confirmation_code().as_str(),
            format_timestamp(booking.created_at()),
        )?;
    }

    Ok(())
}

/// Format bookings as JSON.
fn format_as_json(bookings: &[Booking]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let views: Vec<_> = bookings.iter().map(booking_view).collect();
    serde_json::to_writer_pretty(&mut handle, &views).map_err(json_error)?;
    writeln!(handle)?;

    Ok(())
}

/// Format bookings as CSV.
fn format_as_csv(bookings: &[Booking]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::Writer::from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for booking in bookings {
        writer
            .write_record(&[
                booking.id().map_or_else(String::new, |id| id.to_string()),
                booking.room_id().to_string(),
                booking.user_id().to_string(),
                booking.dates().check_in().to_string(),
                booking.dates().check_out().to_string(),
                booking.occupancy().total().to_string(),
                booking.confirmation_code().as_str().to_string(),
                format_timestamp(booking.created_at()),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
