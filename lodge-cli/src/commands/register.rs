//! Register command implementation.

use clap::Args;

use lodge::operations::{register_user, RegisterRequest};
use lodge::Role;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// Register a user account.
#[derive(Args)]
pub struct RegisterCommand {
    /// Display name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Email address (must be unique, case-insensitive)
    #[arg(long, value_name = "EMAIL")]
    pub email: String,

    /// Opaque password hash produced by an external tool
    #[arg(long, value_name = "HASH")]
    pub password_hash: String,

    /// Phone number
    #[arg(long, value_name = "PHONE")]
    pub phone: Option<String>,

    /// Account role (guest or admin)
    #[arg(long, value_name = "ROLE", default_value = "guest")]
    pub role: String,
}

impl RegisterCommand {
    /// Execute the register command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let role = Role::parse(&self.role).map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let request = RegisterRequest::new(self.name, self.email, self.password_hash)
            .with_phone(self.phone)
            .with_role(role);

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let user = register_user(&mut db, &request).map_err(CliError::from)?;

        // Output just the user id (shell-friendly) to stdout
        if let Some(id) = user.id() {
            println!("{id}");
        }

        if !global.quiet {
            eprintln!("Registered {} <{}> as {}", user.name(), user.email(), user.role());
        }

        Ok(())
    }
}
