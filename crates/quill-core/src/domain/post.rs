use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Post entity - a blog post owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Only the author may mutate or delete a post. Exact match, no
    /// delegation or sharing of ownership.
    pub fn ensure_owned_by(&self, user_id: i64, action: &str) -> Result<(), DomainError> {
        if self.user_id == user_id {
            Ok(())
        } else {
            Err(DomainError::Forbidden(format!(
                "You are not authorized to {action} this post."
            )))
        }
    }
}

/// Draft for a post the store has not assigned an id to yet.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub user_id: i64,
    pub title: String,
    pub content: String,
}

/// One 1-based page of posts, newest first, plus totals over the full set.
#[derive(Debug, Clone)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub total_pages: u64,
    pub total_items: u64,
}

/// Total page count for `total_items` items split into pages of `per_page`.
pub fn page_count(total_items: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 0;
    }
    total_items.div_ceil(per_page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn post(user_id: i64) -> Post {
        Post {
            id: 1,
            user_id,
            title: "title".to_string(),
            content: "content".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(12, 5), 3);
        assert_eq!(page_count(10, 5), 2);
        assert_eq!(page_count(1, 5), 1);
        assert_eq!(page_count(0, 5), 0);
    }

    #[test]
    fn owner_may_act() {
        assert!(post(7).ensure_owned_by(7, "update").is_ok());
    }

    #[test]
    fn non_owner_is_rejected() {
        let err = post(7).ensure_owned_by(8, "delete").unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
    }
}
