//! List-users command implementation.
//!
//! Output goes through the user projection, which never exposes password
//! hashes.

use std::io::Write;

use clap::Args;

use lodge::projection::user_view;
use lodge::Database;

use crate::error::CliError;
use crate::utils::{
    csv_error, json_error, load_configuration, open_database, GlobalOptions, OutputFormat,
};

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 5] = ["id", "name", "email", "phone", "role"];

/// List registered users.
#[derive(Args)]
pub struct ListUsersCommand {
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

impl ListUsersCommand {
    /// Execute the list-users command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let users = Database::list_users(db.connection()).map_err(CliError::from)?;
        let views: Vec<_> = users.iter().map(user_view).collect();

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        match self.format {
            OutputFormat::Table => {
                let header_line = COLUMN_HEADERS
                    .iter()
                    .map(|s| s.to_uppercase())
                    .collect::<Vec<_>>()
                    .join("\t");
                writeln!(handle, "{header_line}")?;

                for view in &views {
                    writeln!(
                        handle,
                        "{}\t{}\t{}\t{}\t{}",
                        view.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
                        view.name,
                        view.email,
                        view.phone.as_deref().unwrap_or("-"),
                        view.role,
                    )?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut handle, &views).map_err(json_error)?;
                writeln!(handle)?;
            }
            OutputFormat::Csv => {
                let mut writer = csv::Writer::from_writer(handle);
                writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;
                for view in &views {
                    writer
                        .write_record(&[
                            view.id.map_or_else(String::new, |id| id.to_string()),
                            view.name.clone(),
                            view.email.clone(),
                            view.phone.clone().unwrap_or_default(),
                            view.role.to_string(),
                        ])
                        .map_err(csv_error)?;
                }
                writer.flush()?;
            }
        }

        Ok(())
    }
}
