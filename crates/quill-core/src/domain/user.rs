use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity - a registered author.
///
/// Username and email are globally unique. Identity is immutable once
/// created; users are never updated or deleted by the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Draft for a user the store has not assigned an id to yet.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
