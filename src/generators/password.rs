// src/generators/password.rs
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use super::{DIGITS, LOWERCASE, SPECIAL, UPPERCASE};
use crate::models::PasswordGenerationOptions;

pub const MIN_PASSWORD_LENGTH: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length must be at least {minimum} characters (got {length})")]
    InvalidLength { length: usize, minimum: usize },

    #[error("At least one character type must be selected")]
    EmptyCharacterPool,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> Result<String> {
        self.generate_with_rng(options, &mut rand::thread_rng())
    }

    /// Generate `count` independent passwords with the same options.
    pub fn generate_multiple(
        &self,
        count: usize,
        options: &PasswordGenerationOptions,
    ) -> Result<Vec<String>> {
        (0..count).map(|_| self.generate_password(options)).collect()
    }

    /// Seeds one character from every selected class, fills the rest from the
    /// combined pool and shuffles, so every selected class is always present.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        options: &PasswordGenerationOptions,
        rng: &mut R,
    ) -> Result<String> {
        if options.length < MIN_PASSWORD_LENGTH {
            return Err(GeneratorError::InvalidLength {
                length: options.length,
                minimum: MIN_PASSWORD_LENGTH,
            });
        }

        let classes = selected_classes(options);
        if classes.is_empty() {
            return Err(GeneratorError::EmptyCharacterPool);
        }

        // Unreachable with four classes and a minimum length of four, kept so
        // the guaranteed characters can never overflow the requested length.
        if classes.len() > options.length {
            return Err(GeneratorError::InvalidLength {
                length: options.length,
                minimum: classes.len(),
            });
        }

        let pool: Vec<u8> = classes.iter().flat_map(|class| class.bytes()).collect();

        let mut chars: Vec<u8> = Vec::with_capacity(options.length);
        for class in &classes {
            if let Some(&c) = class.as_bytes().choose(rng) {
                chars.push(c);
            }
        }

        while chars.len() < options.length {
            chars.push(pool[rng.gen_range(0..pool.len())]);
        }

        chars.shuffle(rng);

        Ok(chars.into_iter().map(char::from).collect())
    }
}

fn selected_classes(options: &PasswordGenerationOptions) -> Vec<&'static str> {
    let mut classes = Vec::with_capacity(4);
    if options.include_lowercase {
        classes.push(LOWERCASE);
    }
    if options.include_uppercase {
        classes.push(UPPERCASE);
    }
    if options.include_digits {
        classes.push(DIGITS);
    }
    if options.include_special {
        classes.push(SPECIAL);
    }
    classes
}
