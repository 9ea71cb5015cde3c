//! Update-room command implementation.

use clap::Args;

use lodge::operations::{update_room, RoomUpdate};
use lodge::RoomId;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, parse_price, GlobalOptions};

/// Update a room's details. Unspecified fields are left unchanged.
#[derive(Args)]
pub struct UpdateRoomCommand {
    /// Room identifier
    #[arg(value_name = "ROOM_ID")]
    pub id: i64,

    /// New room category
    #[arg(long = "type", value_name = "TYPE")]
    pub room_type: Option<String>,

    /// New nightly price as a decimal amount
    #[arg(long, value_name = "AMOUNT")]
    pub price: Option<String>,

    /// New description
    #[arg(long, value_name = "TEXT", conflicts_with = "clear_description")]
    pub description: Option<String>,

    /// Remove the description
    #[arg(long)]
    pub clear_description: bool,

    /// New photo reference
    #[arg(long, value_name = "URL", conflicts_with = "clear_photo_url")]
    pub photo_url: Option<String>,

    /// Remove the photo reference
    #[arg(long)]
    pub clear_photo_url: bool,
}

impl UpdateRoomCommand {
    /// Execute the update-room command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut update = RoomUpdate::new();

        if let Some(room_type) = self.room_type {
            update = update.with_room_type(room_type);
        }
        if let Some(ref price) = self.price {
            update = update.with_price(parse_price(price)?);
        }
        if self.clear_description {
            update = update.with_description(None);
        } else if self.description.is_some() {
            update = update.with_description(self.description);
        }
        if self.clear_photo_url {
            update = update.with_photo_url(None);
        } else if self.photo_url.is_some() {
            update = update.with_photo_url(self.photo_url);
        }

        if update.is_empty() {
            return Err(CliError::InvalidArguments(
                "nothing to update; pass at least one field flag".to_string(),
            ));
        }

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let room = update_room(&mut db, RoomId::new(self.id), &update).map_err(CliError::from)?;

        if !global.quiet {
            eprintln!(
                "Updated room {}: {} at {} per night",
                self.id,
                room.room_type(),
                room.price()
            );
        }

        Ok(())
    }
}
