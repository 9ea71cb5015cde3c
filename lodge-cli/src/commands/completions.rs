//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;

/// Binary name used in generated completion scripts.
const BIN_NAME: &str = "lodge";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        eprintln!("# Generating {} completion script", self.shell);
        eprintln!("# Run the following command to enable completions:");

        match self.shell {
            Shell::Bash => {
                eprintln!(
                    "#   lodge completions bash > ~/.local/share/bash-completion/completions/lodge"
                );
                eprintln!("# Or source it directly in ~/.bashrc:");
                eprintln!("#   eval \"$(lodge completions bash)\"");
            }
            Shell::Zsh => {
                eprintln!("#   lodge completions zsh > ~/.zsh/completions/_lodge");
                eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
                eprintln!("# Or add to ~/.zshrc:");
                eprintln!("#   eval \"$(lodge completions zsh)\"");
            }
            Shell::Fish => {
                eprintln!("#   lodge completions fish > ~/.config/fish/completions/lodge.fish");
                eprintln!("# Or add to config.fish:");
                eprintln!("#   lodge completions fish | source");
            }
            Shell::PowerShell => {
                eprintln!("#   lodge completions powershell > $PROFILE");
                eprintln!("# Or run:");
                eprintln!("#   lodge completions powershell | Out-String | Invoke-Expression");
            }
            _ => {}
        }

        eprintln!();

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
