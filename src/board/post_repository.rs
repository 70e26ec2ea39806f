//! Post repository for plank.
//!
//! Read-side queries for posts. Mutations run inside service-level
//! transactions (see `board::post_service`).

use super::post::Post;
use crate::db::{Caller, DbPool};
use crate::Result;

const POST_COLUMNS: &str = "id, title, content, creator_id, board_id, created_at";

/// Repository for post queries.
pub struct PostRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> PostRepository<'a> {
    /// Create a new PostRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Get a post by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Post>> {
        let result = sqlx::query_as::<_, Post>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(result)
    }

    /// List a page of posts on a board, subject to board visibility.
    ///
    /// Posts come back only when the owning board is public or created by the
    /// caller; a private board someone else owns yields an empty page, the
    /// same as a board with no posts. Ordered by creation time, then ID, so
    /// pagination is deterministic.
    pub async fn list_by_board_paginated(
        &self,
        board_id: i64,
        caller: &Caller,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            "SELECT p.id, p.title, p.content, p.creator_id, p.board_id, p.created_at
             FROM posts p
             JOIN boards b ON b.id = p.board_id
             WHERE p.board_id = ? AND (b.public = 1 OR b.creator_id = ?)
             ORDER BY p.created_at ASC, p.id ASC
             LIMIT ? OFFSET ?",
        )
        .bind(board_id)
        .bind(caller.id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }

    /// Count posts on a board.
    pub async fn count_by_board(&self, board_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE board_id = ?")
            .bind(board_id)
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{Database, NewUser, UserRepository};

    async fn seed_user(db: &Database, username: &str) -> i64 {
        UserRepository::new(db.pool())
            .create(&NewUser {
                email: format!("{username}@example.com"),
                username: username.to_string(),
                full_name: username.to_string(),
                hashed_password: "$argon2id$fake".to_string(),
            })
            .await
            .unwrap()
            .id
    }

    async fn seed_board(db: &Database, name: &str, public: bool, creator_id: i64) -> i64 {
        sqlx::query_scalar(
            "INSERT INTO boards (name, public, creator_id) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(name)
        .bind(public)
        .bind(creator_id)
        .fetch_one(db.pool())
        .await
        .unwrap()
    }

    async fn seed_post(db: &Database, board_id: i64, title: &str, creator_id: i64) -> i64 {
        sqlx::query_scalar(
            "INSERT INTO posts (title, content, creator_id, board_id) VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(title)
        .bind("content")
        .bind(creator_id)
        .bind(board_id)
        .fetch_one(db.pool())
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_list_by_board_pagination_partitions() {
        let db = Database::open_in_memory().await.unwrap();
        let alice = seed_user(&db, "alice").await;
        let board = seed_board(&db, "general", true, alice).await;

        for i in 0..4 {
            seed_post(&db, board, &format!("post {i}"), alice).await;
        }

        let repo = PostRepository::new(db.pool());
        let caller = Caller {
            id: alice,
            is_active: true,
        };

        let first = repo
            .list_by_board_paginated(board, &caller, 2, 0)
            .await
            .unwrap();
        let second = repo
            .list_by_board_paginated(board, &caller, 2, 2)
            .await
            .unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 2);

        let mut ids: Vec<i64> = first.iter().chain(second.iter()).map(|p| p.id).collect();
        let before_dedup = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before_dedup, "pages must not overlap");
        assert_eq!(repo.count_by_board(board).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_list_by_board_hides_private_board_posts() {
        let db = Database::open_in_memory().await.unwrap();
        let alice = seed_user(&db, "alice").await;
        let bob = seed_user(&db, "bob").await;
        let board = seed_board(&db, "secret", false, alice).await;
        seed_post(&db, board, "hidden", alice).await;

        let repo = PostRepository::new(db.pool());

        let as_bob = repo
            .list_by_board_paginated(
                board,
                &Caller {
                    id: bob,
                    is_active: true,
                },
                10,
                0,
            )
            .await
            .unwrap();
        assert!(as_bob.is_empty());

        let as_alice = repo
            .list_by_board_paginated(
                board,
                &Caller {
                    id: alice,
                    is_active: true,
                },
                10,
                0,
            )
            .await
            .unwrap();
        assert_eq!(as_alice.len(), 1);
    }
}
