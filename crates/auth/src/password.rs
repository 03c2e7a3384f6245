//! Argon2 password hashing.
//!
//! Hashes are stored as PHC strings, so parameters can evolve without
//! invalidating existing accounts.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

use crate::error::AuthError;

/// Hash a plaintext password into a PHC string.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hash(e.to_string()))
}

/// Verify a plaintext password against a stored PHC string.
///
/// An unparseable stored hash counts as a failed verification rather than
/// an error; login failures all look the same to the caller.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let hash = hash_password("secret123").unwrap();
        assert!(verify_password("secret123", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn hashes_are_salted() {
        let first = hash_password("secret123").unwrap();
        let second = hash_password("secret123").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn garbage_stored_hash_fails_verification() {
        assert!(!verify_password("secret123", "not-a-phc-string"));
        assert!(!verify_password("secret123", ""));
    }

    #[test]
    fn hash_is_phc_formatted() {
        let hash = hash_password("secret123").unwrap();
        assert!(hash.starts_with("$argon2"));
    }
}
