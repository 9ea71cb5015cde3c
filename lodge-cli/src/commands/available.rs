//! Available command implementation.
//!
//! This module implements the `available` command, which searches for rooms
//! free over a half-open [check-in, check-out) date window.

use std::io::Write;

use clap::Args;

use lodge::projection::room_view;
use lodge::{Database, Room};

use crate::error::CliError;
use crate::utils::{
    json_error, load_configuration, open_database, parse_stay, GlobalOptions, OutputFormat,
};

/// Search rooms available over a date window.
#[derive(Args)]
pub struct AvailableCommand {
    /// Check-in date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub check_in: String,

    /// Check-out date (YYYY-MM-DD, exclusive)
    #[arg(long, value_name = "DATE")]
    pub check_out: String,

    /// Filter by room category (case-insensitive substring)
    #[arg(long = "type", value_name = "TYPE")]
    pub room_type: Option<String>,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "LODGE_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

impl AvailableCommand {
    /// Execute the available command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let dates = parse_stay(&self.check_in, &self.check_out)?;

        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let rooms =
            Database::available_rooms(db.connection(), self.room_type.as_deref(), &dates)
                .map_err(CliError::from)?;

        match self.format {
            OutputFormat::Table => format_as_table(&rooms)?,
            OutputFormat::Json => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                let views: Vec<_> = rooms.iter().map(room_view).collect();
                serde_json::to_writer_pretty(&mut handle, &views).map_err(json_error)?;
                writeln!(handle)?;
            }
            OutputFormat::Csv => format_as_csv(&rooms)?,
        }

        if !global.quiet && rooms.is_empty() {
            eprintln!(
                "No rooms available from {} to {}",
                dates.check_in(),
                dates.check_out()
            );
        }

        Ok(())
    }
}

/// Format available rooms as a human-readable table.
fn format_as_table(rooms: &[Room]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle, "ID\tTYPE\tPRICE\tDESCRIPTION")?;
    for room in rooms {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}",
            room.id().map_or_else(|| "-".to_string(), |id| id.to_string()),
            room.room_type(),
            room.price(),
            room.description().unwrap_or("-"),
        )?;
    }

    Ok(())
}

/// Format available rooms as CSV.
fn format_as_csv(rooms: &[Room]) -> Result<(), CliError> {
    use crate::utils::csv_error;

    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::Writer::from_writer(handle);

    writer
        .write_record(["id", "type", "price", "description"])
        .map_err(csv_error)?;

    for room in rooms {
        writer
            .write_record(&[
                room.id().map_or_else(String::new, |id| id.to_string()),
                room.room_type().to_string(),
                room.price().to_string(),
                room.description().unwrap_or("").to_string(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
