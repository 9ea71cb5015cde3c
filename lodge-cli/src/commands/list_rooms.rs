//! List-rooms command implementation.
//!
//! This module implements the `list-rooms` command, which displays the room
//! inventory in various formats (table, JSON, CSV).

use std::io::Write;

use clap::Args;

use lodge::projection::room_view;
use lodge::{Database, Room};

use crate::error::CliError;
use crate::utils::{
    csv_error, json_error, load_configuration, open_database, GlobalOptions, OutputFormat,
};

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 5] = ["id", "type", "price", "description", "photo_url"];

/// List rooms in the inventory.
#[derive(Args)]
pub struct ListRoomsCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "LODGE_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Filter by room category (case-insensitive substring)
    #[arg(long = "type", value_name = "TYPE")]
    pub room_type: Option<String>,

    /// Only show rooms with no bookings at all
    #[arg(long)]
    pub unbooked: bool,
}

impl ListRoomsCommand {
    /// Execute the list-rooms command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let mut rooms = if self.unbooked {
            Database::unbooked_rooms(db.connection()).map_err(CliError::from)?
        } else {
            Database::list_rooms(db.connection()).map_err(CliError::from)?
        };

        if let Some(ref filter) = self.room_type {
            let needle = filter.to_lowercase();
            rooms.retain(|r| r.room_type().to_lowercase().contains(&needle));
        }

        match self.format {
            OutputFormat::Table => format_as_table(&rooms)?,
            OutputFormat::Json => format_as_json(&rooms)?,
            OutputFormat::Csv => format_as_csv(&rooms)?,
        }

        Ok(())
    }
}

/// Format rooms as a human-readable table.
fn format_as_table(rooms: &[Room]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for room in rooms {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}",
            room.id().map_or_else(|| "-".to_string(), |id| id.to_string()),
            room.room_type(),
            room.price(),
            room.description().unwrap_or("-"),
            room.photo_url().unwrap_or("-"),
        )?;
    }

    Ok(())
}

/// Format rooms as JSON.
fn format_as_json(rooms: &[Room]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let views: Vec<_> = rooms.iter().map(room_view).collect();
    serde_json::to_writer_pretty(&mut handle, &views).map_err(json_error)?;
    writeln!(handle)?;

    Ok(())
}

/// Format rooms as CSV.
fn format_as_csv(rooms: &[Room]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::Writer::from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for room in rooms {
        writer
            .write_record(&[
                room.id().map_or_else(String::new, |id| id.to_string()),
                room.room_type().to_string(),
                room.price().to_string(),
                room.description().unwrap_or("").to_string(),
                room.photo_url().unwrap_or("").to_string(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
