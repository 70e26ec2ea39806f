//! Board model for plank.

use serde::Serialize;
use sqlx::FromRow;

/// Board entity: a named, ownable container for posts, public or private.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Board {
    /// Unique board ID.
    pub id: i64,
    /// Board name (globally unique).
    pub name: String,
    /// Whether the board is visible to everyone.
    pub public: bool,
    /// User ID of the creator; sole holder of mutation rights.
    pub creator_id: i64,
    /// Board creation timestamp.
    pub created_at: String,
}

impl Board {
    /// Check whether a user may see this board.
    ///
    /// Public boards are visible to everyone; private boards only to their
    /// creator.
    pub fn visible_to(&self, user_id: i64) -> bool {
        self.public || self.creator_id == user_id
    }
}

/// Board row joined with its post count, as returned by board listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BoardWithPostCount {
    /// Unique board ID.
    pub id: i64,
    /// Board name.
    pub name: String,
    /// Whether the board is visible to everyone.
    pub public: bool,
    /// User ID of the creator.
    pub creator_id: i64,
    /// Board creation timestamp.
    pub created_at: String,
    /// Number of posts on the board (zero for empty boards).
    pub post_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(public: bool) -> Board {
        Board {
            id: 1,
            name: "general".to_string(),
            public,
            creator_id: 10,
            created_at: "2024-01-01 00:00:00".to_string(),
        }
    }

    #[test]
    fn test_public_board_visible_to_everyone() {
        let b = board(true);
        assert!(b.visible_to(10));
        assert!(b.visible_to(999));
    }

    #[test]
    fn test_private_board_visible_only_to_creator() {
        let b = board(false);
        assert!(b.visible_to(10));
        assert!(!b.visible_to(999));
    }
}
