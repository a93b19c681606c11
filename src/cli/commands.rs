// src/cli/commands.rs
use clap::{Args as ClapArgs, Subcommand};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate passwords
    Generate(GenerateArgs),

    /// Search saved services
    Search {
        /// Exact service name to look up
        service: Option<String>,

        /// Case-insensitive substring to match against service names
        #[arg(long)]
        query: Option<String>,
    },

    /// List all saved services
    List,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct GenerateArgs {
    /// Password length (defaults to DEFAULT_PASSWORD_LENGTH or 12)
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Exclude lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Exclude uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Exclude digits
    #[arg(long)]
    pub no_digits: bool,

    /// Include special characters
    #[arg(short, long)]
    pub special: bool,

    /// Number of passwords to generate
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Save the generated password to the store
    #[arg(long)]
    pub save: bool,

    /// Service name to save under
    #[arg(long)]
    pub service: Option<String>,

    /// Username to save
    #[arg(long)]
    pub username: Option<String>,
}
