// src/db/mod.rs
use thiserror::Error;

use crate::models::StoreDocument;

pub mod json;

pub use json::JsonFileBackend;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to replace store file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

pub type Result<T> = std::result::Result<T, DbError>;

/// Durable home of the store document. The whole document is read and
/// written at once; there are no partial updates.
pub trait DocumentBackend {
    // Ok(None) when nothing has been persisted yet
    fn load(&self) -> Result<Option<StoreDocument>>;

    fn save(&self, document: &StoreDocument) -> Result<()>;
}
