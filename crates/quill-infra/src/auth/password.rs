//! Argon2 password hashing implementation.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use quill_core::ports::{AuthError, PasswordService};

/// Argon2-based password service.
///
/// Stored credentials are PHC strings carrying their own salt; the
/// plaintext never leaves this module.
pub struct Argon2PasswordService {
    argon2: Argon2<'static>,
}

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl Default for Argon2PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::HashingError(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_original_and_rejects_others() {
        let service = Argon2PasswordService::new();

        let hash = service.hash("correct horse battery staple").unwrap();
        assert!(service.verify("correct horse battery staple", &hash).unwrap());
        assert!(!service.verify("Tr0ub4dor&3", &hash).unwrap());
    }

    #[test]
    fn hash_never_contains_plaintext() {
        let service = Argon2PasswordService::new();

        let hash = service.hash("hunter2").unwrap();
        assert!(!hash.contains("hunter2"));
    }

    #[test]
    fn garbage_stored_hash_is_an_error() {
        let service = Argon2PasswordService::new();

        assert!(service.verify("anything", "not-a-phc-string").is_err());
    }
}
