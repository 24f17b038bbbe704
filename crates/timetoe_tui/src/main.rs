//! timetoe - tic-tac-toe with a time-travel move history.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use timetoe_tui::{Cli, Command, TuiConfig, logging, run_play, run_replay};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load_or_default(&cli.config)?;

    match cli.resolved_command() {
        Command::Play => {
            logging::init_file_logging(&config)?;
            run_play(&config)
        }
        Command::Replay { json, actions } => {
            logging::init_stderr_logging(&config);
            print!("{}", run_replay(&actions, json)?);
            if json {
                println!();
            }
            Ok(())
        }
    }
}
