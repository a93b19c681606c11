// src/generators/mod.rs
mod password;
mod strength;

pub use password::{GeneratorError, PasswordGenerator, MIN_PASSWORD_LENGTH};
pub use strength::{calculate_entropy, classify_strength};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";
