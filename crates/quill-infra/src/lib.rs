//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! SeaORM-backed and in-memory repositories, Argon2 password hashing, and
//! server-side session storage.

pub mod auth;
pub mod database;

pub use auth::{Argon2PasswordService, InMemorySessionStore, SessionConfig};
pub use database::{
    DatabaseConfig, MemoryPostRepository, MemoryUserRepository, SqlPostRepository,
    SqlUserRepository,
};
