//! Add-room command implementation.

use clap::Args;

use lodge::operations::add_room;
use lodge::Room;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, parse_price, GlobalOptions};

/// Add a room to the inventory.
#[derive(Args)]
pub struct AddRoomCommand {
    /// Room category (e.g. "Single", "Double Deluxe")
    #[arg(long = "type", value_name = "TYPE")]
    pub room_type: String,

    /// Nightly price as a decimal amount (e.g. 189.00)
    #[arg(long, value_name = "AMOUNT")]
    pub price: String,

    /// Free-form description
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Photo reference (URL or path)
    #[arg(long, value_name = "URL")]
    pub photo_url: Option<String>,
}

impl AddRoomCommand {
    /// Execute the add-room command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let price = parse_price(&self.price)?;

        let room = Room::builder(self.room_type, price)
            .description(self.description)
            .photo_url(self.photo_url)
            .build()
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let room = add_room(&mut db, &room).map_err(CliError::from)?;

        // Output just the room id (shell-friendly) to stdout
        if let Some(id) = room.id() {
            println!("{id}");
        }

        if !global.quiet {
            eprintln!("Added {} room at {} per night", room.room_type(), room.price());
        }

        Ok(())
    }
}
