// src/crypto.rs
//
// Single-pass SHA-256 digests for the master passphrase and stored passwords.
// There is no salt and no key stretching, so stored hashes are cheap to attack
// offline. Changing this would break compatibility with existing stores.
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Length of a hex-encoded SHA-256 digest.
pub const HASH_HEX_LEN: usize = 64;

// Hash a secret into its lowercase hex digest
pub fn hash_password(secret: &str) -> String {
    let digest = Sha256::digest(secret.as_bytes());
    hex::encode(digest)
}

// Check a secret against a stored digest
pub fn verify_password(secret: &str, password_hash: &str) -> bool {
    if password_hash.len() != HASH_HEX_LEN {
        return false;
    }

    let computed = hash_password(secret);
    computed.as_bytes().ct_eq(password_hash.as_bytes()).into()
}
