//! SeaORM repository implementations.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use quill_core::domain::{NewPost, NewUser, Post, PostPage, User, page_count};
use quill_core::error::RepoError;
use quill_core::ports::{PostRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::sql_base::SqlRepository;

/// SeaORM user repository.
pub type SqlUserRepository = SqlRepository<UserEntity>;

/// SeaORM post repository.
pub type SqlPostRepository = SqlRepository<PostEntity>;

/// Map an insert error, folding unique-index violations into `Constraint`.
fn map_insert_err(e: DbErr) -> RepoError {
    let err_str = e.to_string();
    if err_str.contains("duplicate") || err_str.contains("unique") {
        RepoError::Constraint(err_str)
    } else {
        RepoError::Query(err_str)
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn create(&self, draft: NewUser) -> Result<User, RepoError> {
        let active_model: user::ActiveModel = draft.into();
        let model = active_model.insert(&self.db).await.map_err(map_insert_err)?;

        Ok(model.into())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        // Mask email for logging to avoid PII in logs
        let masked = if let Some(at_pos) = email.find('@') {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = if local.len() > 1 {
                format!("{}***", &local[..1])
            } else {
                "***".to_string()
            };
            format!("{}{}", masked_local, domain)
        } else {
            "***".to_string()
        };
        tracing::debug!(user_email = %masked, "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl PostRepository for SqlPostRepository {
    async fn create(&self, draft: NewPost) -> Result<Post, RepoError> {
        let active_model: post::ActiveModel = draft.into();
        let model = active_model.insert(&self.db).await.map_err(map_insert_err)?;

        Ok(model.into())
    }

    async fn find_page(&self, page: u64, per_page: u64) -> Result<PostPage, RepoError> {
        let page = page.max(1);

        // Id breaks ties between posts sharing a creation timestamp.
        let paginator = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .paginate(&self.db, per_page);

        let total_items = paginator
            .num_items()
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        // SeaORM pages are 0-based; the API is 1-based.
        let posts = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(PostPage {
            posts,
            total_pages: page_count(total_items, per_page),
            total_items,
        })
    }
}
