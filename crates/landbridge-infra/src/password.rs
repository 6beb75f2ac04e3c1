//! Mock password hashing. Not a security boundary.

use sha2::{Digest, Sha256};

const PASSWORD_SALT: &str = "landbridge_salt";

pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(PASSWORD_SALT.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    hash_password(password) == hash
}
