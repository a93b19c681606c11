// src/cli/prompt.rs
use inquire::{Password, PasswordDisplayMode, Text};

/// Source of interactive input for the command handlers.
pub trait Prompt {
    fn text(&mut self, message: &str) -> anyhow::Result<String>;

    // Hidden input; `confirm` asks twice when a new master password is being set
    fn master_password(&mut self, confirm: bool) -> anyhow::Result<String>;
}

pub struct InquirePrompt;

impl Prompt for InquirePrompt {
    fn text(&mut self, message: &str) -> anyhow::Result<String> {
        Ok(Text::new(message).prompt()?)
    }

    fn master_password(&mut self, confirm: bool) -> anyhow::Result<String> {
        let prompt = Password::new("Enter master password:")
            .with_display_mode(PasswordDisplayMode::Hidden);

        let prompt = if confirm {
            prompt
                .with_custom_confirmation_message("Confirm master password:")
                .with_custom_confirmation_error_message("Passwords do not match.")
        } else {
            prompt.without_confirmation()
        };

        Ok(prompt.prompt()?)
    }
}
