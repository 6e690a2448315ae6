//! Password hash value object.
//!
//! Encapsulates Argon2 hashing and verification. The type is neither
//! `Serialize` nor revealing in `Debug`, so a hash cannot leak through
//! logs or JSON responses by accident.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::config::MIN_PASSWORD_LENGTH;
use crate::errors::{AppError, AppResult};

/// One-way salted password hash in PHC string format.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHash")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl PasswordHash {
    /// Hash a plain text password.
    ///
    /// # Errors
    /// Returns a validation error if the password is shorter than
    /// [`MIN_PASSWORD_LENGTH`] bytes.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        if plain_text.len() < MIN_PASSWORD_LENGTH {
            return Err(AppError::validation(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;

        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Wrap a hash read back from storage.
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Verify a plain text password against this hash.
    ///
    /// A malformed stored hash never matches.
    pub fn verify(&self, plain_text: &str) -> bool {
        match argon2::password_hash::PasswordHash::new(&self.hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!("Stored password hash is malformed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let plain = "SecurePassword123!";
        let hash = PasswordHash::new(plain).unwrap();

        assert!(hash.verify(plain));
        assert!(!hash.verify("WrongPassword123"));
    }

    #[test]
    fn test_password_from_hash() {
        let plain = "TestPassword123";
        let stored = PasswordHash::new(plain).unwrap().as_str().to_string();

        let restored = PasswordHash::from_hash(stored);
        assert!(restored.verify(plain));
    }

    #[test]
    fn test_same_password_different_salts() {
        let plain = "SamePassword123";
        let first = PasswordHash::new(plain).unwrap();
        let second = PasswordHash::new(plain).unwrap();

        assert_ne!(first.as_str(), second.as_str());
        assert!(first.verify(plain));
        assert!(second.verify(plain));
    }

    #[test]
    fn test_password_too_short() {
        for plain in ["", "a", "short", "1234567"] {
            let result = PasswordHash::new(plain);
            assert!(matches!(result, Err(AppError::Validation(_))), "{plain:?}");
        }
    }

    #[test]
    fn test_password_minimum_length() {
        let hash = PasswordHash::new("12345678").unwrap();
        assert!(hash.verify("12345678"));
        assert!(!hash.verify("123456789"));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        let hash = PasswordHash::from_hash("not-a-phc-string".to_string());
        assert!(!hash.verify("anything"));
        assert!(!hash.verify(""));
    }

    #[test]
    fn test_debug_is_redacted() {
        let hash = PasswordHash::new("SecurePassword123!").unwrap();
        let debug = format!("{:?}", hash);

        assert!(!debug.contains(hash.as_str()));
        assert!(debug.contains("[REDACTED]"));
    }
}
