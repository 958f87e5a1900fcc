//! Argon2id password hashing and strength validation.
//!
//! Hashes are stored in PHC string format so the algorithm parameters and
//! salt travel with the hash itself. Nothing here verifies a password; the
//! service has no login.

use std::borrow::Cow;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;
use validator::ValidationError;

/// Shortest password accepted on account creation.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Hash a plaintext password using Argon2id with a random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// `#[validate(custom)]` hook enforcing [`MIN_PASSWORD_LENGTH`] characters.
pub fn password_strength(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::new("password_too_short").with_message(Cow::Owned(
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters long"),
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    use super::*;

    fn matches(password: &str, hash: &str) -> bool {
        let parsed = PasswordHash::new(hash).expect("stored hash should be valid PHC");
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    #[test]
    fn test_hash_is_argon2id_phc() {
        let password = "correct-horse-battery-staple";
        let hash = hash_password(password).expect("hashing should succeed");

        assert!(hash.starts_with("$argon2id$"), "expected argon2id PHC prefix");
        assert!(matches(password, &hash));
        assert!(!matches("wrong-password", &hash));
    }

    #[test]
    fn test_hash_never_contains_plaintext() {
        let hash = hash_password("testpass123").unwrap();
        assert!(!hash.contains("testpass123"));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let a = hash_password("testpass123").unwrap();
        let b = hash_password("testpass123").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_password_too_short() {
        let err = password_strength("short").unwrap_err();
        let msg = err.message.expect("message attached").to_string();
        assert!(msg.contains("at least 8 characters"));
    }

    #[test]
    fn test_password_meets_minimum() {
        assert!(password_strength("eight_ch").is_ok());
        assert!(password_strength("testpass123").is_ok());
    }
}
