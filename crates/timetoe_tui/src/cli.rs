//! Command-line interface for timetoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use timetoe::Action;

use crate::config::DEFAULT_CONFIG_PATH;

/// timetoe - tic-tac-toe with a time-travel move history
#[derive(Parser, Debug)]
#[command(name = "timetoe")]
#[command(about = "Tic-tac-toe with a time-travel move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, env = "TIMETOE_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply actions without a terminal and print the resulting view
    Replay {
        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Actions: a square index to click, `j<step>` to jump, `r` to reverse
        #[arg(value_name = "ACTION", allow_hyphen_values = true)]
        actions: Vec<Action>,
    },
}

impl Cli {
    /// The requested command, `play` when none was given.
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}
