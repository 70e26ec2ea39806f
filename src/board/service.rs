//! Board service for plank.
//!
//! High-level board operations with ownership and visibility checking.
//! Each mutating operation wraps its check-then-write statements in a single
//! transaction; on error the transaction rolls back on drop. The UNIQUE index
//! on `boards.name` remains the authoritative duplicate guard underneath the
//! pre-checks.

use crate::db::{Caller, Database};
use crate::{PlankError, Result};

use super::repository::BoardRepository;
use super::types::{Board, BoardWithPostCount};

/// Maximum length for board names (in characters).
pub const MAX_NAME_LENGTH: usize = 50;

const BOARD_NAME_TAKEN: &str = "board with this name already exists";

/// Validate a board name string.
fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(PlankError::Validation(
            "board name must not be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(PlankError::Validation(format!(
            "board name must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Service for board operations.
pub struct BoardService<'a> {
    db: &'a Database,
}

impl<'a> BoardService<'a> {
    /// Create a new BoardService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Create a new board owned by the caller.
    ///
    /// Fails with `Conflict` if a board with the same name already exists.
    pub async fn create_board(&self, name: &str, public: bool, caller: &Caller) -> Result<Board> {
        let name = name.trim();
        validate_name(name)?;

        let mut tx = self.db.begin().await?;

        let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM boards WHERE name = ?")
            .bind(name)
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_some() {
            return Err(PlankError::Conflict(BOARD_NAME_TAKEN.to_string()));
        }

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO boards (name, public, creator_id) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(name)
        .bind(public)
        .bind(caller.id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| PlankError::from_sqlx(e, BOARD_NAME_TAKEN))?;

        let board = sqlx::query_as::<_, Board>(
            "SELECT id, name, public, creator_id, created_at FROM boards WHERE id = ?",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!("Board {} created by user {}", board.id, caller.id);
        Ok(board)
    }

    /// Overwrite a board's name and publicity.
    ///
    /// Fails with `NotFound` if the board doesn't exist, `Forbidden` if the
    /// caller isn't the creator, and `Conflict` if the new name collides with
    /// another board.
    pub async fn update_board(
        &self,
        board_id: i64,
        name: &str,
        public: bool,
        caller: &Caller,
    ) -> Result<Board> {
        let name = name.trim();
        validate_name(name)?;

        let mut tx = self.db.begin().await?;

        let board: Option<Board> = sqlx::query_as(
            "SELECT id, name, public, creator_id, created_at FROM boards WHERE id = ?",
        )
        .bind(board_id)
        .fetch_optional(&mut *tx)
        .await?;
        let board = board.ok_or_else(|| PlankError::NotFound("board".to_string()))?;

        if board.creator_id != caller.id {
            return Err(PlankError::Permission(
                "you are not the creator of this board".to_string(),
            ));
        }

        // Renames must not collide with another board's name.
        if name != board.name {
            let taken: Option<i64> =
                sqlx::query_scalar("SELECT id FROM boards WHERE name = ? AND id != ?")
                    .bind(name)
                    .bind(board_id)
                    .fetch_optional(&mut *tx)
                    .await?;
            if taken.is_some() {
                return Err(PlankError::Conflict(BOARD_NAME_TAKEN.to_string()));
            }
        }

        sqlx::query("UPDATE boards SET name = ?, public = ? WHERE id = ?")
            .bind(name)
            .bind(public)
            .bind(board_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| PlankError::from_sqlx(e, BOARD_NAME_TAKEN))?;

        let board = sqlx::query_as::<_, Board>(
            "SELECT id, name, public, creator_id, created_at FROM boards WHERE id = ?",
        )
        .bind(board_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(board)
    }

    /// Delete a board and, by cascade, its posts.
    ///
    /// Same existence and ownership checks as `update_board`.
    pub async fn delete_board(&self, board_id: i64, caller: &Caller) -> Result<()> {
        let mut tx = self.db.begin().await?;

        let creator_id: Option<i64> =
            sqlx::query_scalar("SELECT creator_id FROM boards WHERE id = ?")
                .bind(board_id)
                .fetch_optional(&mut *tx)
                .await?;
        let creator_id = creator_id.ok_or_else(|| PlankError::NotFound("board".to_string()))?;

        if creator_id != caller.id {
            return Err(PlankError::Permission(
                "you are not the creator of this board".to_string(),
            ));
        }

        sqlx::query("DELETE FROM boards WHERE id = ?")
            .bind(board_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!("Board {} deleted by user {}", board_id, caller.id);
        Ok(())
    }

    /// Get a board visible to the caller.
    ///
    /// A private board owned by someone else reports `NotFound`, exactly as
    /// if it did not exist, so its existence never leaks.
    pub async fn get_board(&self, board_id: i64, caller: &Caller) -> Result<Board> {
        let repo = BoardRepository::new(self.db.pool());
        match repo.get_by_id(board_id).await? {
            Some(board) if board.visible_to(caller.id) => Ok(board),
            _ => Err(PlankError::NotFound("board".to_string())),
        }
    }

    /// List boards visible to the caller, with post counts, ordered by post
    /// count descending.
    pub async fn list_boards(&self, caller: &Caller) -> Result<Vec<BoardWithPostCount>> {
        let repo = BoardRepository::new(self.db.pool());
        repo.list_visible(caller).await
    }
}
