// src/core/vault.rs
//
// Gated credential store. Every read and write is checked against the master
// passphrase hash, and gate failures are reported the same way as "nothing
// found" so callers cannot tell a wrong passphrase from an empty store.
//
// The document is loaded once and written back whole after each change.
// Nothing coordinates separate processes sharing one file: the last writer wins.
use thiserror::Error;

use crate::crypto;
use crate::db::{DbError, DocumentBackend};
use crate::models::{PasswordRecord, ServiceSummary, StoreDocument};

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("Failed to persist password store: {0}")]
    Storage(#[from] DbError),
}

pub type Result<T> = std::result::Result<T, VaultError>;

pub struct Vault<B: DocumentBackend> {
    backend: B,
    document: StoreDocument,
}

impl<B: DocumentBackend> Vault<B> {
    /// Load the document from `backend`. A missing or unreadable document
    /// yields an empty store; this never fails.
    pub fn open(backend: B) -> Self {
        let document = match backend.load() {
            Ok(Some(document)) => document,
            Ok(None) => {
                log::debug!("No password store found, starting empty");
                StoreDocument::default()
            }
            Err(e) => {
                log::warn!("Could not read password store, starting empty: {}", e);
                StoreDocument::default()
            }
        };

        Self { backend, document }
    }

    pub fn is_initialized(&self) -> bool {
        self.document.master_hash.is_some()
    }

    fn unlocked(&self, master_password: &str) -> bool {
        self.document
            .master_hash
            .as_deref()
            .is_some_and(|hash| crypto::verify_password(master_password, hash))
    }

    /// Store the hash of `password` for `service`, replacing any previous
    /// record. The first call on an empty store fixes the master passphrase.
    ///
    /// Returns `Ok(false)` when the passphrase is rejected. Write failures are
    /// errors and leave the store exactly as it was.
    pub fn set_password(
        &mut self,
        service: &str,
        username: &str,
        password: &str,
        master_password: &str,
    ) -> Result<bool> {
        let mut next = self.document.clone();

        match self.document.master_hash.as_deref() {
            None => {
                log::info!("Setting master password for new store");
                next.master_hash = Some(crypto::hash_password(master_password));
            }
            Some(hash) => {
                if !crypto::verify_password(master_password, hash) {
                    log::debug!("Master password rejected for write");
                    return Ok(false);
                }
            }
        }

        next.passwords.insert(
            service.to_string(),
            PasswordRecord {
                username: username.to_string(),
                password_hash: crypto::hash_password(password),
                service: service.to_string(),
            },
        );

        self.backend.save(&next)?;
        self.document = next;

        log::info!("Stored credentials for service '{}'", service);
        Ok(true)
    }

    pub fn get(&self, service: &str, master_password: &str) -> Option<&PasswordRecord> {
        if !self.unlocked(master_password) {
            return None;
        }
        self.document.passwords.get(service)
    }

    pub fn list_services(&self, master_password: &str) -> Vec<String> {
        if !self.unlocked(master_password) {
            return Vec::new();
        }
        self.document.passwords.keys().cloned().collect()
    }

    // Case-insensitive substring match on the service key; "" matches everything
    pub fn search(&self, query: &str, master_password: &str) -> Vec<ServiceSummary> {
        if !self.unlocked(master_password) {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        self.document
            .passwords
            .iter()
            .filter(|(service, _)| service.to_lowercase().contains(&needle))
            .map(|(service, record)| ServiceSummary {
                service: service.clone(),
                username: record.username.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryBackend;
    use crate::db::JsonFileBackend;

    const MASTER: &str = "open sesame";

    fn seeded_vault() -> Vault<MemoryBackend> {
        let mut vault = Vault::open(MemoryBackend::default());
        assert!(vault.set_password("GitHub", "octocat", "gh-secret", MASTER).unwrap());
        assert!(vault.set_password("gitlab", "tanuki", "gl-secret", MASTER).unwrap());
        assert!(vault.set_password("Mail", "me@example.com", "mail-secret", MASTER).unwrap());
        vault
    }

    #[test]
    fn empty_store_gates_everything() {
        let vault = Vault::open(MemoryBackend::default());
        assert!(!vault.is_initialized());
        assert!(vault.get("GitHub", "").is_none());
        assert!(vault.get("GitHub", MASTER).is_none());
        assert!(vault.list_services(MASTER).is_empty());
        assert!(vault.search("", MASTER).is_empty());
    }

    #[test]
    fn first_write_establishes_master_password() {
        let backend = MemoryBackend::default();
        let mut vault = Vault::open(backend.clone());

        assert!(vault.set_password("GitHub", "octocat", "gh-secret", MASTER).unwrap());
        assert!(vault.is_initialized());

        let stored = backend.stored.borrow().clone().unwrap();
        assert_eq!(stored.master_hash, Some(crypto::hash_password(MASTER)));
    }

    #[test]
    fn stored_record_round_trips_without_plaintext() {
        let vault = seeded_vault();
        let record = vault.get("GitHub", MASTER).unwrap();

        assert_eq!(record.service, "GitHub");
        assert_eq!(record.username, "octocat");
        assert!(crypto::verify_password("gh-secret", &record.password_hash));
        assert_ne!(record.password_hash, "gh-secret");
    }

    #[test]
    fn get_uses_exact_key() {
        let vault = seeded_vault();
        assert!(vault.get("github", MASTER).is_none());
        assert!(vault.get("Git", MASTER).is_none());
    }

    #[test]
    fn wrong_master_password_is_rejected_without_changes() {
        let backend = MemoryBackend::default();
        let mut vault = Vault::open(backend.clone());
        vault.set_password("GitHub", "octocat", "gh-secret", MASTER).unwrap();
        let before = backend.stored.borrow().clone();
        let saves = *backend.saves.borrow();

        assert!(!vault.set_password("GitHub", "mallory", "evil", "guess").unwrap());
        assert!(!vault.set_password("Bank", "mallory", "evil", "guess").unwrap());

        assert_eq!(*backend.stored.borrow(), before);
        assert_eq!(*backend.saves.borrow(), saves);
        assert_eq!(vault.get("GitHub", MASTER).unwrap().username, "octocat");
        assert!(vault.get("Bank", MASTER).is_none());
    }

    #[test]
    fn reads_with_wrong_master_password_look_empty() {
        let vault = seeded_vault();
        assert!(vault.get("GitHub", "guess").is_none());
        assert!(vault.list_services("guess").is_empty());
        assert!(vault.search("", "guess").is_empty());
        assert!(vault.search("git", "guess").is_empty());
    }

    #[test]
    fn upsert_replaces_existing_record() {
        let mut vault = seeded_vault();
        assert!(vault.set_password("GitHub", "hubot", "new-secret", MASTER).unwrap());

        let record = vault.get("GitHub", MASTER).unwrap();
        assert_eq!(record.username, "hubot");
        assert!(crypto::verify_password("new-secret", &record.password_hash));
        assert!(!crypto::verify_password("gh-secret", &record.password_hash));
        assert_eq!(vault.list_services(MASTER).len(), 3);
    }

    #[test]
    fn list_returns_every_service() {
        let vault = seeded_vault();
        let mut services = vault.list_services(MASTER);
        services.sort();
        assert_eq!(services, vec!["GitHub", "Mail", "gitlab"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let vault = seeded_vault();

        let mut hits: Vec<String> = vault
            .search("GIT", MASTER)
            .into_iter()
            .map(|hit| hit.service)
            .collect();
        hits.sort();
        assert_eq!(hits, vec!["GitHub", "gitlab"]);

        let mail = vault.search("ai", MASTER);
        assert_eq!(
            mail,
            vec![ServiceSummary {
                service: "Mail".to_string(),
                username: "me@example.com".to_string(),
            }]
        );

        assert!(vault.search("nothing-like-this", MASTER).is_empty());
    }

    #[test]
    fn empty_query_matches_all() {
        let vault = seeded_vault();
        assert_eq!(vault.search("", MASTER).len(), 3);
    }

    #[test]
    fn failed_write_propagates_and_keeps_state() {
        let backend = MemoryBackend::default();
        let mut vault = Vault::open(backend.clone());
        *backend.fail_writes.borrow_mut() = true;

        let err = vault.set_password("GitHub", "octocat", "gh-secret", MASTER);
        assert!(matches!(err, Err(VaultError::Storage(_))));
        assert!(!vault.is_initialized());
        assert!(backend.stored.borrow().is_none());

        // A different passphrase can still become the master afterwards.
        *backend.fail_writes.borrow_mut() = false;
        assert!(vault.set_password("GitHub", "octocat", "gh-secret", "other").unwrap());
        assert!(vault.get("GitHub", "other").is_some());
    }

    #[test]
    fn failed_update_keeps_previous_record() {
        let backend = MemoryBackend::default();
        let mut vault = Vault::open(backend.clone());
        vault.set_password("GitHub", "octocat", "gh-secret", MASTER).unwrap();
        *backend.fail_writes.borrow_mut() = true;

        assert!(vault.set_password("GitHub", "hubot", "new", MASTER).is_err());
        assert_eq!(vault.get("GitHub", MASTER).unwrap().username, "octocat");
    }

    #[test]
    fn store_survives_reopen_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("passwords.json");

        {
            let mut vault = Vault::open(JsonFileBackend::new(&path));
            assert!(vault.set_password("GitHub", "octocat", "gh-secret", MASTER).unwrap());
        }

        let mut reopened = Vault::open(JsonFileBackend::new(&path));
        assert!(reopened.is_initialized());
        let record = reopened.get("GitHub", MASTER).unwrap();
        assert!(crypto::verify_password("gh-secret", &record.password_hash));

        assert!(!reopened.set_password("Bank", "me", "pw", "not the master").unwrap());
        let again = Vault::open(JsonFileBackend::new(&path));
        assert!(again.get("Bank", MASTER).is_none());
    }

    #[test]
    fn corrupt_file_opens_as_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("passwords.json");
        std::fs::write(&path, "[1, 2,").unwrap();

        let mut vault = Vault::open(JsonFileBackend::new(&path));
        assert!(!vault.is_initialized());
        assert!(vault.list_services(MASTER).is_empty());

        // The next write replaces the unreadable file.
        assert!(vault.set_password("GitHub", "octocat", "gh-secret", "fresh").unwrap());
        let reopened = Vault::open(JsonFileBackend::new(&path));
        assert_eq!(reopened.list_services("fresh"), vec!["GitHub"]);
    }
}
