//! Board repository for plank.
//!
//! Read-side queries for boards. Mutations run inside service-level
//! transactions (see `board::service`).

use super::types::{Board, BoardWithPostCount};
use crate::db::{Caller, DbPool};
use crate::Result;

const BOARD_COLUMNS: &str = "id, name, public, creator_id, created_at";

/// Repository for board queries.
pub struct BoardRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> BoardRepository<'a> {
    /// Create a new BoardRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Get a board by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Board>> {
        let result = sqlx::query_as::<_, Board>(&format!(
            "SELECT {BOARD_COLUMNS} FROM boards WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(result)
    }

    /// List boards visible to the caller, each with its post count.
    ///
    /// Active callers see public boards plus their own; inactive callers see
    /// public boards only. Boards with no posts appear with a count of zero
    /// (LEFT JOIN). Ordered by post count descending, then by ID for a
    /// stable order among equal counts.
    pub async fn list_visible(&self, caller: &Caller) -> Result<Vec<BoardWithPostCount>> {
        let boards = if caller.is_active {
            sqlx::query_as::<_, BoardWithPostCount>(
                "SELECT b.id, b.name, b.public, b.creator_id, b.created_at,
                        COUNT(p.id) AS post_count
                 FROM boards b
                 LEFT JOIN posts p ON p.board_id = b.id
                 WHERE b.public = 1 OR b.creator_id = ?
                 GROUP BY b.id
                 ORDER BY post_count DESC, b.id ASC",
            )
            .bind(caller.id)
            .fetch_all(self.pool)
            .await?
        } else {
            sqlx::query_as::<_, BoardWithPostCount>(
                "SELECT b.id, b.name, b.public, b.creator_id, b.created_at,
                        COUNT(p.id) AS post_count
                 FROM boards b
                 LEFT JOIN posts p ON p.board_id = b.id
                 WHERE b.public = 1
                 GROUP BY b.id
                 ORDER BY post_count DESC, b.id ASC",
            )
            .fetch_all(self.pool)
            .await?
        };

        Ok(boards)
    }

    /// Count all boards.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM boards")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
