// src/cli/handlers.rs
use std::io::Write;

use anyhow::Result;
use console::style;

use super::commands::GenerateArgs;
use super::prompt::Prompt;
use crate::core::vault::Vault;
use crate::db::DocumentBackend;
use crate::generators::{classify_strength, PasswordGenerator};
use crate::models::PasswordGenerationOptions;

pub fn generation_options(args: &GenerateArgs, default_length: usize) -> PasswordGenerationOptions {
    PasswordGenerationOptions {
        length: args.length.unwrap_or(default_length),
        include_lowercase: !args.no_lowercase,
        include_uppercase: !args.no_uppercase,
        include_digits: !args.no_digits,
        include_special: args.special,
    }
}

/// Generate and print passwords. Returns the password when exactly one was
/// generated; generator errors are printed and yield `None`.
pub fn handle_generate<W: Write>(
    args: &GenerateArgs,
    default_length: usize,
    out: &mut W,
) -> Result<Option<String>> {
    let generator = PasswordGenerator::new();
    let options = generation_options(args, default_length);

    if args.count > 1 {
        let passwords = match generator.generate_multiple(args.count as usize, &options) {
            Ok(passwords) => passwords,
            Err(e) => {
                writeln!(out, "{} {}", style("Error:").red(), e)?;
                return Ok(None);
            }
        };

        writeln!(out, "Generated {} passwords:", passwords.len())?;
        for (i, password) in passwords.iter().enumerate() {
            writeln!(out, "{}. {} [{}]", i + 1, password, classify_strength(password))?;
        }
        return Ok(None);
    }

    match generator.generate_password(&options) {
        Ok(password) => {
            writeln!(out, "Generated password: {}", password)?;
            writeln!(out, "Strength: {}", classify_strength(&password))?;
            Ok(Some(password))
        }
        Err(e) => {
            writeln!(out, "{} {}", style("Error:").red(), e)?;
            Ok(None)
        }
    }
}

pub fn handle_save<B, P, W>(
    vault: &mut Vault<B>,
    password: &str,
    service: Option<&str>,
    username: Option<&str>,
    prompt: &mut P,
    out: &mut W,
) -> Result<bool>
where
    B: DocumentBackend,
    P: Prompt,
    W: Write,
{
    let service = match service {
        Some(service) => service.to_string(),
        None => prompt.text("Service name:")?,
    };
    let username = match username {
        Some(username) => username.to_string(),
        None => prompt.text("Username:")?,
    };

    let first_use = !vault.is_initialized();
    if first_use {
        writeln!(out, "No master password set yet; the one you enter now will protect this store.")?;
    }
    let master_password = prompt.master_password(first_use)?;

    if vault.set_password(&service, &username, password, &master_password)? {
        writeln!(out, "{} Password for {} saved.", style("✅").green(), service)?;
        Ok(true)
    } else {
        writeln!(out, "{} Invalid master password!", style("❌").red())?;
        Ok(false)
    }
}

pub fn handle_search<B, P, W>(
    vault: &Vault<B>,
    service: Option<&str>,
    query: Option<&str>,
    prompt: &mut P,
    out: &mut W,
) -> Result<()>
where
    B: DocumentBackend,
    P: Prompt,
    W: Write,
{
    let master_password = prompt.master_password(false)?;

    if let Some(service) = service {
        match vault.get(service, &master_password) {
            Some(record) => {
                writeln!(out, "Service: {}", record.service)?;
                writeln!(out, "Username: {}", record.username)?;
                writeln!(out, "Password: [stored as a hash only]")?;
            }
            None => writeln!(out, "Service not found or invalid master password")?,
        }
        return Ok(());
    }

    let results = vault.search(query.unwrap_or(""), &master_password);
    if results.is_empty() {
        writeln!(out, "No services found")?;
    } else {
        writeln!(out, "Found {} services:", results.len())?;
        for result in &results {
            writeln!(out, "- {} (user: {})", result.service, result.username)?;
        }
    }

    Ok(())
}

pub fn handle_list<B, P, W>(vault: &Vault<B>, prompt: &mut P, out: &mut W) -> Result<()>
where
    B: DocumentBackend,
    P: Prompt,
    W: Write,
{
    let master_password = prompt.master_password(false)?;
    let services = vault.list_services(&master_password);

    if services.is_empty() {
        writeln!(out, "No saved services or invalid master password")?;
    } else {
        writeln!(out, "Saved {} services:", services.len())?;
        for service in &services {
            writeln!(out, "- {}", service)?;
        }
    }

    Ok(())
}
