#[cfg(test)]
mod tests {
    use crate::database::entity::{post, user};
    use crate::database::sql_repo::{SqlPostRepository, SqlUserRepository};
    use quill_core::domain::{Post, User};
    use quill_core::error::RepoError;
    use quill_core::ports::{BaseRepository, UserRepository};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn user_row(id: i64, username: &str) -> user::Model {
        user::Model {
            id,
            username: username.to_owned(),
            email: format!("{username}@example.com"),
            password_hash: "$argon2id$fake".to_owned(),
            created_at: chrono::Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let now = chrono::Utc::now();

        // Mock the query expectation
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post::Model {
                id: 3,
                user_id: 1,
                title: "Test Post".to_owned(),
                content: "Content".to_owned(),
                created_at: now.into(),
            }]])
            .into_connection();

        let repo = SqlPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(3).await.unwrap();

        assert!(result.is_some());
        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, 3);
        assert_eq!(post.user_id, 1);
    }

    #[tokio::test]
    async fn test_find_by_username_misses() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<user::Model>::new()])
            .into_connection();

        let repo = SqlUserRepository::new(db);

        let result = repo.find_by_username("nobody").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_find_all_users_maps_to_domain() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_row(1, "alice"), user_row(2, "bob")]])
            .into_connection();

        let repo = SqlUserRepository::new(db);

        let users: Vec<User> = BaseRepository::<User, i64>::find_all(&repo).await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "alice");
        assert_eq!(users[1].email, "bob@example.com");
    }

    #[tokio::test]
    async fn test_delete_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = SqlPostRepository::new(db);

        let result: Result<(), RepoError> = BaseRepository::<Post, i64>::delete(&repo, 42).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }
}
