//! Post model for plank.

use serde::Serialize;
use sqlx::FromRow;

/// Post entity: a titled message belonging to exactly one board.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    /// Unique post ID.
    pub id: i64,
    /// Post title (unique within its board).
    pub title: String,
    /// Post body.
    pub content: String,
    /// User ID of the creator; sole holder of mutation rights.
    pub creator_id: i64,
    /// Board this post belongs to.
    pub board_id: i64,
    /// Post creation timestamp.
    pub created_at: String,
}
