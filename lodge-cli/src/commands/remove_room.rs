//! Remove-room command implementation.

use clap::Args;

use lodge::operations::remove_room;
use lodge::RoomId;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// Remove a room from the inventory.
///
/// Bookings for the room are cancelled along with it.
#[derive(Args)]
pub struct RemoveRoomCommand {
    /// Room identifier
    #[arg(value_name = "ROOM_ID")]
    pub id: i64,
}

impl RemoveRoomCommand {
    /// Execute the remove-room command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        remove_room(&mut db, RoomId::new(self.id)).map_err(CliError::from)?;

        if !global.quiet {
            eprintln!("Removed room {}", self.id);
        }

        Ok(())
    }
}
