//! In-memory repository implementations.
//!
//! Used when no database is configured, and by the HTTP-level tests. They
//! honor the same contract as the SeaORM repositories, including uniqueness
//! conflicts, store-assigned ids and newest-first pagination.
//! Note: data is lost on process restart.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use quill_core::domain::{NewPost, NewUser, Post, PostPage, User, page_count};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository, UserRepository};

struct Table<T> {
    rows: Vec<T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn assign_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// In-memory user repository.
#[derive(Default)]
pub struct MemoryUserRepository {
    table: RwLock<Table<User>>,
}

#[async_trait]
impl BaseRepository<User, i64> for MemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|u| u.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.clone())
    }

    async fn update(&self, user: User) -> Result<User, RepoError> {
        let mut table = self.table.write().await;
        let row = table
            .rows
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(RepoError::NotFound)?;

        *row = user.clone();
        Ok(user)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|u| u.id != id);

        if table.rows.len() == before {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, draft: NewUser) -> Result<User, RepoError> {
        let mut table = self.table.write().await;

        if table.rows.iter().any(|u| u.username == draft.username) {
            return Err(RepoError::Constraint(
                "unique constraint violated: users.username".to_string(),
            ));
        }
        if table.rows.iter().any(|u| u.email == draft.email) {
            return Err(RepoError::Constraint(
                "unique constraint violated: users.email".to_string(),
            ));
        }

        let user = User {
            id: table.assign_id(),
            username: draft.username,
            email: draft.email,
            password_hash: draft.password_hash,
            created_at: Utc::now(),
        };
        table.rows.push(user.clone());

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|u| u.email == email).cloned())
    }
}

/// In-memory post repository.
#[derive(Default)]
pub struct MemoryPostRepository {
    table: RwLock<Table<Post>>,
}

#[async_trait]
impl BaseRepository<Post, i64> for MemoryPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.clone())
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        let row = table
            .rows
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or(RepoError::NotFound)?;

        *row = post.clone();
        Ok(post)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|p| p.id != id);

        if table.rows.len() == before {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn create(&self, draft: NewPost) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;

        let post = Post {
            id: table.assign_id(),
            user_id: draft.user_id,
            title: draft.title,
            content: draft.content,
            created_at: Utc::now(),
        };
        table.rows.push(post.clone());

        Ok(post)
    }

    async fn find_page(&self, page: u64, per_page: u64) -> Result<PostPage, RepoError> {
        let table = self.table.read().await;

        let mut posts = table.rows.clone();
        // Id breaks ties between posts sharing a creation timestamp.
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        let total_items = posts.len() as u64;
        let start = (page.max(1) - 1).saturating_mul(per_page);
        let posts = posts
            .into_iter()
            .skip(start as usize)
            .take(per_page as usize)
            .collect();

        Ok(PostPage {
            posts,
            total_pages: page_count(total_items, per_page),
            total_items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$fake".to_string(),
        }
    }

    fn draft_post(user_id: i64, title: &str) -> NewPost {
        NewPost {
            user_id,
            title: title.to_string(),
            content: format!("content of {title}"),
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let repo = MemoryUserRepository::default();

        let alice = repo.create(draft_user("alice", "alice@example.com")).await.unwrap();
        let bob = repo.create(draft_user("bob", "bob@example.com")).await.unwrap();

        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);
    }

    #[tokio::test]
    async fn duplicate_username_is_a_constraint_violation() {
        let repo = MemoryUserRepository::default();
        repo.create(draft_user("alice", "alice@example.com")).await.unwrap();

        let err = repo
            .create(draft_user("alice", "other@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::Constraint(_)));
        // The first user is unaffected.
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_email_is_a_constraint_violation() {
        let repo = MemoryUserRepository::default();
        repo.create(draft_user("alice", "alice@example.com")).await.unwrap();

        let err = repo
            .create(draft_user("bob", "alice@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::Constraint(_)));
    }

    #[tokio::test]
    async fn update_missing_user_is_not_found() {
        let repo = MemoryUserRepository::default();

        let ghost = User {
            id: 99,
            username: "ghost".to_string(),
            email: "ghost@example.com".to_string(),
            password_hash: "x".to_string(),
            created_at: Utc::now(),
        };

        assert!(matches!(repo.update(ghost).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn delete_missing_post_is_not_found() {
        let repo = MemoryPostRepository::default();

        assert!(matches!(repo.delete(1).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn pagination_is_newest_first_with_totals() {
        let repo = MemoryPostRepository::default();
        for i in 1..=12 {
            repo.create(draft_post(1, &format!("post-{i}"))).await.unwrap();
        }

        let page = repo.find_page(2, 5).await.unwrap();

        assert_eq!(page.total_items, 12);
        assert_eq!(page.total_pages, 3);
        let titles: Vec<&str> = page.posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["post-7", "post-6", "post-5", "post-4", "post-3"]);
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty() {
        let repo = MemoryPostRepository::default();
        repo.create(draft_post(1, "only")).await.unwrap();

        let page = repo.find_page(4, 5).await.unwrap();

        assert!(page.posts.is_empty());
        assert_eq!(page.total_items, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn update_replaces_title_and_content() {
        let repo = MemoryPostRepository::default();
        let mut post = repo.create(draft_post(1, "before")).await.unwrap();

        post.title = "after".to_string();
        post.content = "rewritten".to_string();
        repo.update(post.clone()).await.unwrap();

        let stored = repo.find_by_id(post.id).await.unwrap().unwrap();
        assert_eq!(stored.title, "after");
        assert_eq!(stored.content, "rewritten");
        assert_eq!(stored.user_id, 1);
    }
}
