// src/db/json.rs
use std::fs;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use tempfile::NamedTempFile;

use super::{DocumentBackend, Result};
use crate::models::StoreDocument;

pub const DEFAULT_STORAGE_FILE: &str = "passwords.json";

#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    // Directory the temporary file is created in, so the rename stays on one filesystem
    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

impl DocumentBackend for JsonFileBackend {
    fn load(&self) -> Result<Option<StoreDocument>> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let document = serde_json::from_reader(BufReader::new(file))?;
        Ok(Some(document))
    }

    fn save(&self, document: &StoreDocument) -> Result<()> {
        let dir = self.parent_dir();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let mut tmp = NamedTempFile::new_in(&dir)?;
        serde_json::to_writer_pretty(&mut tmp, document)?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;

        log::debug!("Wrote store document to {}", self.path.display());
        Ok(())
    }
}
