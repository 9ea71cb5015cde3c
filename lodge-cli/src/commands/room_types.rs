//! Room-types command implementation.

use std::io::Write;

use clap::Args;

use lodge::Database;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// List distinct room categories, one per line.
#[derive(Args)]
pub struct RoomTypesCommand {}

impl RoomTypesCommand {
    /// Execute the room-types command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let types = Database::distinct_room_types(db.connection()).map_err(CliError::from)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        for room_type in types {
            writeln!(handle, "{room_type}")?;
        }

        Ok(())
    }
}
