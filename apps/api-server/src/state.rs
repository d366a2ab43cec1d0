//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{PasswordService, PostRepository, SessionStore, UserRepository};
use quill_infra::auth::{Argon2PasswordService, InMemorySessionStore, SessionConfig};
use quill_infra::database::{
    self, DatabaseConfig, MemoryPostRepository, MemoryUserRepository, SqlPostRepository,
    SqlUserRepository,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub passwords: Arc<dyn PasswordService>,
    pub sessions: Arc<dyn SessionStore>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>, session_config: SessionConfig) -> Self {
        let state = match db_config {
            Some(config) => match database::connect(config).await {
                Ok(conn) => Self {
                    users: Arc::new(SqlUserRepository::new(conn.clone())),
                    posts: Arc::new(SqlPostRepository::new(conn)),
                    passwords: Arc::new(Argon2PasswordService::new()),
                    sessions: Arc::new(InMemorySessionStore::new(session_config)),
                },
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using the in-memory store.",
                        e
                    );
                    Self::in_memory(session_config)
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running on the in-memory store.");
                Self::in_memory(session_config)
            }
        };

        tracing::info!("Application state initialized");

        state
    }

    /// State backed entirely by in-memory implementations.
    pub fn in_memory(session_config: SessionConfig) -> Self {
        Self {
            users: Arc::new(MemoryUserRepository::default()),
            posts: Arc::new(MemoryPostRepository::default()),
            passwords: Arc::new(Argon2PasswordService::new()),
            sessions: Arc::new(InMemorySessionStore::new(session_config)),
        }
    }
}
