//! Book command implementation.
//!
//! This module implements the `book` command, which reserves a room for a
//! guest over a date window and prints the confirmation code.

use clap::Args;

use lodge::operations::{create_booking, find_user, BookingRequest};
use lodge::{Occupancy, RoomId, UserId};

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, parse_stay, GlobalOptions};

/// Book a room for a guest.
#[derive(Args)]
pub struct BookCommand {
    /// Room identifier
    #[arg(long, value_name = "ROOM_ID")]
    pub room: i64,

    /// User identifier
    #[arg(long, value_name = "USER_ID", conflicts_with = "email")]
    pub user: Option<i64>,

    /// User email (alternative to --user)
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// Check-in date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub check_in: String,

    /// Check-out date (YYYY-MM-DD, exclusive)
    #[arg(long, value_name = "DATE")]
    pub check_out: String,

    /// Number of adults
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    pub adults: u32,

    /// Number of children
    #[arg(long, value_name = "COUNT", default_value_t = 0)]
    pub children: u32,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let dates = parse_stay(&self.check_in, &self.check_out)?;
        let occupancy = Occupancy::new(self.adults, self.children)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        if self.user.is_none() && self.email.is_none() {
            return Err(CliError::InvalidArguments(
                "pass --user or --email to identify the guest".to_string(),
            ));
        }

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let user = find_user(&db, self.user.map(UserId::new), self.email.as_deref())
            .map_err(CliError::from)?
            .ok_or_else(|| CliError::SemanticFailure("No such user".to_string()))?;
        let user_id = user.id().ok_or_else(|| {
            CliError::Library(lodge::Error::DatabaseCorruption {
                details: "stored user has no id".to_string(),
            })
        })?;

        let request =
            BookingRequest::new(user_id, RoomId::new(self.room), dates).with_occupancy(occupancy);
        let booking = create_booking(&mut db, &config, &request).map_err(CliError::from)?;

        // Output just the confirmation code (shell-friendly) to stdout
        println!("{}", booking.confirmation_code().as_str());

        if !global.quiet {
            eprintln!(
                "Booked room {} for {} from {} to {} ({} night(s), {} guest(s))",
                self.room,
                user.name(),
                booking.dates().check_in(),
                booking.dates().check_out(),
                booking.dates().nights(),
                booking.occupancy().total(),
            );
        }

        Ok(())
    }
}
