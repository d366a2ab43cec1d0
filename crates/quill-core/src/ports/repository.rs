use async_trait::async_trait;

use crate::domain::{NewPost, NewUser, Post, PostPage, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Fetch every entity, in insertion order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Persist changes to an existing entity.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, i64> {
    /// Insert a new user; the store assigns the id.
    ///
    /// Username and email collisions surface as [`RepoError::Constraint`].
    async fn create(&self, user: NewUser) -> Result<User, RepoError>;

    /// Find a user by their unique username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;

    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i64> {
    /// Insert a new post; the store assigns the id.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// One 1-based page of posts ordered newest first, with totals computed
    /// over the full set. Pages past the end are empty, not an error.
    async fn find_page(&self, page: u64, per_page: u64) -> Result<PostPage, RepoError>;
}
