//! Cancel command implementation.

use clap::Args;

use lodge::operations::{cancel_booking, cancel_booking_by_code};
use lodge::BookingId;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// Cancel a booking by id or confirmation code.
#[derive(Args)]
pub struct CancelCommand {
    /// Booking identifier
    #[arg(long, value_name = "BOOKING_ID", conflicts_with = "code")]
    pub id: Option<i64>,

    /// Confirmation code
    #[arg(long, value_name = "CODE")]
    pub code: Option<String>,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let booking = match (self.id, self.code) {
            (Some(id), _) => cancel_booking(&mut db, BookingId::new(id)).map_err(CliError::from)?,
            (None, Some(code)) => cancel_booking_by_code(&mut db, &code).map_err(CliError::from)?,
            (None, None) => {
                return Err(CliError::InvalidArguments(
                    "pass --id or --code to identify the booking".to_string(),
                ))
            }
        };

        if !global.quiet {
            eprintln!(
                "Cancelled booking for room {} from {} to {}",
                booking.room_id(),
                booking.dates().check_in(),
                booking.dates().check_out(),
            );
        }

        Ok(())
    }
}
