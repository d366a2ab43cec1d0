//! Authentication ports - password hashing and session tracking.

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Server-side session tracking.
///
/// A session associates an opaque token with one user id from login until
/// logout or expiry. Expired and unknown tokens both resolve to no
/// identity; callers cannot tell them apart.
pub trait SessionStore: Send + Sync {
    /// Start a session for a user, returning the opaque token.
    fn open(&self, user_id: i64) -> String;

    /// Resolve a token to the user id it was opened for, if still live.
    fn resolve(&self, token: &str) -> Option<i64>;

    /// Terminate a session. Unknown tokens are a no-op.
    fn revoke(&self, token: &str);

    /// Session lifetime, for cookie max-age.
    fn ttl_seconds(&self) -> i64;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Hashing error: {0}")]
    HashingError(String),
}
