use clap::{CommandFactory, Parser};
use inquire::InquireError;
use std::io;
use std::path::Path;
use std::process::ExitCode;

mod cli;
mod core;
mod crypto;
mod db;
mod generators;
mod logging;
mod models;

use crate::cli::prompt::InquirePrompt;
use crate::cli::Args;
use crate::core::config::Config;

// Ctrl+C or Esc at a prompt
fn is_interrupt(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<InquireError>(),
        Some(InquireError::OperationInterrupted) | Some(InquireError::OperationCanceled)
    )
}

fn main() -> ExitCode {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    if let Err(e) = logging::init_logging(&config) {
        eprintln!("Could not initialise logging: {e}");
    }
    log::debug!("Loaded config: {:?}", config);

    let Some(command) = args.command else {
        if let Err(e) = Args::command().print_help() {
            eprintln!("{e}");
        }
        return ExitCode::SUCCESS;
    };

    let mut stdout = io::stdout().lock();
    match cli::run(command, args.store, &config, &mut InquirePrompt, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_interrupt(&e) => {
            println!("\nInterrupted by user");
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("Command failed: {:#}", e);
            eprintln!("An error occurred: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
