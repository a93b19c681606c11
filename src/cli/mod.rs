// src/cli/mod.rs
use std::io::Write;
use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod prompt;

pub use commands::CliCommand;

use crate::core::config::Config;
use crate::core::vault::Vault;
use crate::db::JsonFileBackend;
use prompt::Prompt;

#[derive(Parser, Debug)]
#[command(author, version, about = "Secure password generator and store", long_about = None)]
pub struct Args {
    /// Password store file (overrides PASSGEN_STORAGE_FILE)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

// Dispatch one parsed command. The store is only opened by commands that touch it.
pub fn run<P: Prompt, W: Write>(
    command: CliCommand,
    store: Option<PathBuf>,
    config: &Config,
    prompt: &mut P,
    out: &mut W,
) -> anyhow::Result<()> {
    let store_path = store.unwrap_or_else(|| config.storage_file.clone());
    let open_vault = || {
        log::debug!("Opening password store at {}", store_path.display());
        Vault::open(JsonFileBackend::new(&store_path))
    };

    match command {
        CliCommand::Generate(args) => {
            if args.save && args.count > 1 {
                bail!("--save can only be used when generating a single password");
            }

            let generated = handlers::handle_generate(&args, config.default_password_length, out)?;

            if let (true, Some(password)) = (args.save, generated) {
                let mut vault = open_vault();
                handlers::handle_save(
                    &mut vault,
                    &password,
                    args.service.as_deref(),
                    args.username.as_deref(),
                    prompt,
                    out,
                )?;
            }
        }
        CliCommand::Search { service, query } => {
            let vault = open_vault();
            handlers::handle_search(&vault, service.as_deref(), query.as_deref(), prompt, out)?;
        }
        CliCommand::List => {
            let vault = open_vault();
            handlers::handle_list(&vault, prompt, out)?;
        }
    }

    Ok(())
}
