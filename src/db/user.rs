//! User model for plank.

use serde::Serialize;
use sqlx::FromRow;

/// User entity representing a registered user.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: i64,
    /// Email address.
    pub email: String,
    /// Login username (unique).
    pub username: String,
    /// Full display name.
    pub full_name: String,
    /// Password hash (Argon2).
    pub hashed_password: String,
    /// Whether the account is active.
    pub is_active: bool,
    /// Whether the account has superuser rights.
    pub is_superuser: bool,
    /// Whether the email address has been verified.
    pub is_verified: bool,
}

impl User {
    /// The identity this user presents to the board/post services.
    pub fn caller(&self) -> Caller {
        Caller {
            id: self.id,
            is_active: self.is_active,
        }
    }
}

/// Data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Email address.
    pub email: String,
    /// Login username.
    pub username: String,
    /// Full display name.
    pub full_name: String,
    /// Password hash (already hashed, never plaintext).
    pub hashed_password: String,
}

/// The authenticated identity passed into service operations.
///
/// Ownership checks compare `id` against a record's `creator_id`; the
/// `is_active` flag widens or narrows board visibility in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Caller {
    /// User ID of the caller.
    pub id: i64,
    /// Whether the caller's account is active.
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_from_user() {
        let user = User {
            id: 7,
            email: "a@example.com".to_string(),
            username: "alice".to_string(),
            full_name: "Alice".to_string(),
            hashed_password: "$argon2id$...".to_string(),
            is_active: false,
            is_superuser: false,
            is_verified: true,
        };

        let caller = user.caller();
        assert_eq!(caller.id, 7);
        assert!(!caller.is_active);
    }
}
