//! Post service for plank.
//!
//! High-level post operations. Visibility follows the owning board: callers
//! other than the board creator can only reach posts on public boards.
//! Post titles are unique within their board, enforced both by a pre-check
//! and the UNIQUE(board_id, title) index.

use crate::db::{Caller, Database};
use crate::{PlankError, Result};

use super::post::Post;
use super::post_repository::PostRepository;
use super::types::Board;

/// Maximum length for post titles (in characters).
pub const MAX_TITLE_LENGTH: usize = 100;

/// Maximum length for post content (in characters).
pub const MAX_CONTENT_LENGTH: usize = 10_000;

/// Default number of posts per page.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Maximum number of posts per page.
pub const MAX_PAGE_LIMIT: i64 = 100;

const POST_TITLE_TAKEN: &str = "post with this title already exists on the board";

fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(PlankError::Validation(
            "post title must not be empty".to_string(),
        ));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(PlankError::Validation(format!(
            "post title must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

fn validate_content(content: &str) -> Result<()> {
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(PlankError::Validation(format!(
            "post content must be at most {MAX_CONTENT_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Service for post operations.
pub struct PostService<'a> {
    db: &'a Database,
}

impl<'a> PostService<'a> {
    /// Create a new PostService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Create a post on a board.
    ///
    /// The board must exist and be writable by the caller: public boards
    /// accept posts from anyone, private boards only from their creator.
    pub async fn create_post(
        &self,
        board_id: i64,
        title: &str,
        content: &str,
        caller: &Caller,
    ) -> Result<Post> {
        let title = title.trim();
        validate_title(title)?;
        validate_content(content)?;

        let mut tx = self.db.begin().await?;

        let board: Option<Board> = sqlx::query_as(
            "SELECT id, name, public, creator_id, created_at FROM boards WHERE id = ?",
        )
        .bind(board_id)
        .fetch_optional(&mut *tx)
        .await?;
        let board = board.ok_or_else(|| PlankError::NotFound("board".to_string()))?;

        if !board.public && board.creator_id != caller.id {
            return Err(PlankError::Permission(
                "you cannot create a post on this board".to_string(),
            ));
        }

        let existing: Option<i64> =
            sqlx::query_scalar("SELECT id FROM posts WHERE board_id = ? AND title = ?")
                .bind(board_id)
                .bind(title)
                .fetch_optional(&mut *tx)
                .await?;
        if existing.is_some() {
            return Err(PlankError::Conflict(POST_TITLE_TAKEN.to_string()));
        }

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO posts (title, content, creator_id, board_id) VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(title)
        .bind(content)
        .bind(caller.id)
        .bind(board_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| PlankError::from_sqlx(e, POST_TITLE_TAKEN))?;

        let post = sqlx::query_as::<_, Post>(
            "SELECT id, title, content, creator_id, board_id, created_at FROM posts WHERE id = ?",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!("Post {} created on board {} by user {}", post.id, board_id, caller.id);
        Ok(post)
    }

    /// Overwrite a post's title and content.
    ///
    /// Only the post's creator may update it. A retitle must not collide
    /// with another post on the same board.
    pub async fn update_post(
        &self,
        post_id: i64,
        title: &str,
        content: &str,
        caller: &Caller,
    ) -> Result<Post> {
        let title = title.trim();
        validate_title(title)?;
        validate_content(content)?;

        let mut tx = self.db.begin().await?;

        let post: Option<Post> = sqlx::query_as(
            "SELECT id, title, content, creator_id, board_id, created_at FROM posts WHERE id = ?",
        )
        .bind(post_id)
        .fetch_optional(&mut *tx)
        .await?;
        let post = post.ok_or_else(|| PlankError::NotFound("post".to_string()))?;

        if post.creator_id != caller.id {
            return Err(PlankError::Permission(
                "you are not the creator of this post".to_string(),
            ));
        }

        if title != post.title {
            let taken: Option<i64> = sqlx::query_scalar(
                "SELECT id FROM posts WHERE board_id = ? AND title = ? AND id != ?",
            )
            .bind(post.board_id)
            .bind(title)
            .bind(post_id)
            .fetch_optional(&mut *tx)
            .await?;
            if taken.is_some() {
                return Err(PlankError::Conflict(POST_TITLE_TAKEN.to_string()));
            }
        }

        sqlx::query("UPDATE posts SET title = ?, content = ? WHERE id = ?")
            .bind(title)
            .bind(content)
            .bind(post_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| PlankError::from_sqlx(e, POST_TITLE_TAKEN))?;

        let post = sqlx::query_as::<_, Post>(
            "SELECT id, title, content, creator_id, board_id, created_at FROM posts WHERE id = ?",
        )
        .bind(post_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(post)
    }

    /// Delete a post. Only the post's creator may delete it.
    pub async fn delete_post(&self, post_id: i64, caller: &Caller) -> Result<()> {
        let mut tx = self.db.begin().await?;

        let creator_id: Option<i64> = sqlx::query_scalar("SELECT creator_id FROM posts WHERE id = ?")
            .bind(post_id)
            .fetch_optional(&mut *tx)
            .await?;
        let creator_id = creator_id.ok_or_else(|| PlankError::NotFound("post".to_string()))?;

        if creator_id != caller.id {
            return Err(PlankError::Permission(
                "you are not the creator of this post".to_string(),
            ));
        }

        sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(post_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!("Post {} deleted by user {}", post_id, caller.id);
        Ok(())
    }

    /// Get a post readable by the caller.
    ///
    /// A missing post reports `NotFound`. A post on a private board is
    /// `Forbidden` unless the caller authored it.
    pub async fn get_post(&self, post_id: i64, caller: &Caller) -> Result<Post> {
        let repo = PostRepository::new(self.db.pool());
        let post = repo
            .get_by_id(post_id)
            .await?
            .ok_or_else(|| PlankError::NotFound("post".to_string()))?;

        let public: Option<bool> = sqlx::query_scalar("SELECT public FROM boards WHERE id = ?")
            .bind(post.board_id)
            .fetch_optional(self.db.pool())
            .await?;
        let public = public.ok_or_else(|| PlankError::NotFound("board".to_string()))?;

        if !public && post.creator_id != caller.id {
            return Err(PlankError::Permission(
                "you cannot view this post".to_string(),
            ));
        }

        Ok(post)
    }

    /// List a page of posts on a board, oldest first.
    ///
    /// Posts on a board invisible to the caller are filtered out, so a
    /// private board owned by someone else yields an empty page.
    pub async fn list_posts(
        &self,
        board_id: i64,
        caller: &Caller,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>> {
        if !(1..=MAX_PAGE_LIMIT).contains(&limit) {
            return Err(PlankError::Validation(format!(
                "limit must be between 1 and {MAX_PAGE_LIMIT}"
            )));
        }
        if offset < 0 {
            return Err(PlankError::Validation(
                "offset must not be negative".to_string(),
            ));
        }

        let repo = PostRepository::new(self.db.pool());
        repo.list_by_board_paginated(board_id, caller, limit, offset)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardService;
    use crate::db::{Database, NewUser, UserRepository};

    async fn seed_caller(db: &Database, username: &str) -> Caller {
        UserRepository::new(db.pool())
            .create(&NewUser {
                email: format!("{username}@example.com"),
                username: username.to_string(),
                full_name: username.to_string(),
                hashed_password: "$argon2id$fake".to_string(),
            })
            .await
            .unwrap()
            .caller()
    }

    #[tokio::test]
    async fn test_create_post_on_missing_board() {
        let db = Database::open_in_memory().await.unwrap();
        let alice = seed_caller(&db, "alice").await;
        let service = PostService::new(&db);

        let err = service
            .create_post(424242, "hello", "body", &alice)
            .await
            .unwrap_err();
        assert!(matches!(err, PlankError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_post_on_private_board() {
        let db = Database::open_in_memory().await.unwrap();
        let alice = seed_caller(&db, "alice").await;
        let bob = seed_caller(&db, "bob").await;
        let board = BoardService::new(&db)
            .create_board("secret", false, &alice)
            .await
            .unwrap();
        let service = PostService::new(&db);

        // Creator may post on their own private board
        service
            .create_post(board.id, "mine", "body", &alice)
            .await
            .unwrap();

        // Anyone else is refused
        let err = service
            .create_post(board.id, "intruder", "body", &bob)
            .await
            .unwrap_err();
        assert!(matches!(err, PlankError::Permission(_)));
    }

    #[tokio::test]
    async fn test_post_title_unique_within_board() {
        let db = Database::open_in_memory().await.unwrap();
        let alice = seed_caller(&db, "alice").await;
        let board_service = BoardService::new(&db);
        let tech = board_service.create_board("tech", true, &alice).await.unwrap();
        let misc = board_service.create_board("misc", true, &alice).await.unwrap();
        let service = PostService::new(&db);

        service.create_post(tech.id, "hello", "a", &alice).await.unwrap();

        let err = service
            .create_post(tech.id, "hello", "b", &alice)
            .await
            .unwrap_err();
        assert!(matches!(err, PlankError::Conflict(_)));

        // Same title is fine on a different board
        service.create_post(misc.id, "hello", "c", &alice).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_post_ownership_and_retitle() {
        let db = Database::open_in_memory().await.unwrap();
        let alice = seed_caller(&db, "alice").await;
        let bob = seed_caller(&db, "bob").await;
        let board = BoardService::new(&db)
            .create_board("tech", true, &alice)
            .await
            .unwrap();
        let service = PostService::new(&db);

        let first = service.create_post(board.id, "first", "a", &alice).await.unwrap();
        let second = service.create_post(board.id, "second", "b", &bob).await.unwrap();

        // Board creator does not get to edit other people's posts
        let err = service
            .update_post(second.id, "stolen", "c", &alice)
            .await
            .unwrap_err();
        assert!(matches!(err, PlankError::Permission(_)));

        // Retitle onto an existing title collides
        let err = service
            .update_post(second.id, "first", "c", &bob)
            .await
            .unwrap_err();
        assert!(matches!(err, PlankError::Conflict(_)));

        // Keeping the title while changing content is fine
        let updated = service
            .update_post(first.id, "first", "rewritten", &alice)
            .await
            .unwrap();
        assert_eq!(updated.content, "rewritten");
    }

    #[tokio::test]
    async fn test_delete_post_checks() {
        let db = Database::open_in_memory().await.unwrap();
        let alice = seed_caller(&db, "alice").await;
        let bob = seed_caller(&db, "bob").await;
        let board = BoardService::new(&db)
            .create_board("tech", true, &alice)
            .await
            .unwrap();
        let service = PostService::new(&db);

        let post = service.create_post(board.id, "hello", "a", &bob).await.unwrap();

        let err = service.delete_post(post.id, &alice).await.unwrap_err();
        assert!(matches!(err, PlankError::Permission(_)));

        service.delete_post(post.id, &bob).await.unwrap();

        let err = service.delete_post(post.id, &bob).await.unwrap_err();
        assert!(matches!(err, PlankError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_post_on_private_board() {
        let db = Database::open_in_memory().await.unwrap();
        let alice = seed_caller(&db, "alice").await;
        let bob = seed_caller(&db, "bob").await;
        let board = BoardService::new(&db)
            .create_board("secret", false, &alice)
            .await
            .unwrap();
        let service = PostService::new(&db);

        let post = service.create_post(board.id, "hidden", "a", &alice).await.unwrap();

        assert_eq!(service.get_post(post.id, &alice).await.unwrap().id, post.id);

        let err = service.get_post(post.id, &bob).await.unwrap_err();
        assert!(matches!(err, PlankError::Permission(_)));
    }

    #[tokio::test]
    async fn test_list_posts_validates_page_params() {
        let db = Database::open_in_memory().await.unwrap();
        let alice = seed_caller(&db, "alice").await;
        let board = BoardService::new(&db)
            .create_board("tech", true, &alice)
            .await
            .unwrap();
        let service = PostService::new(&db);

        for limit in [0, 101, -5] {
            let err = service
                .list_posts(board.id, &alice, limit, 0)
                .await
                .unwrap_err();
            assert!(matches!(err, PlankError::Validation(_)));
        }
        let err = service
            .list_posts(board.id, &alice, 10, -1)
            .await
            .unwrap_err();
        assert!(matches!(err, PlankError::Validation(_)));

        // Listing a missing board is an empty page, like a private one
        let posts = service.list_posts(424242, &alice, 10, 0).await.unwrap();
        assert!(posts.is_empty());
    }
}
