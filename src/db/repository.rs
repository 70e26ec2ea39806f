//! User repository for plank.
//!
//! This module provides CRUD operations for users in the database.

use super::user::{NewUser, User};
use super::DbPool;
use crate::{PlankError, Result};

const USER_COLUMNS: &str = "id, email, username, full_name, hashed_password, \
                            is_active, is_superuser, is_verified";

/// Repository for user CRUD operations.
pub struct UserRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Create a new user in the database.
    ///
    /// Returns the created user with the assigned ID. A duplicate username
    /// is reported as a `Conflict`.
    pub async fn create(&self, new_user: &NewUser) -> Result<User> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO users (email, username, full_name, hashed_password)
             VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(&new_user.email)
        .bind(&new_user.username)
        .bind(&new_user.full_name)
        .bind(&new_user.hashed_password)
        .fetch_one(self.pool)
        .await
        .map_err(|e| PlankError::from_sqlx(e, "username already exists"))?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| PlankError::NotFound("user".to_string()))
    }

    /// Get a user by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        let result = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(result)
    }

    /// Get a user by username (case-insensitive).
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>> {
        let result = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = ? COLLATE NOCASE"
        ))
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(result)
    }

    /// Check whether a username is already taken (case-insensitive).
    pub async fn username_exists(&self, username: &str) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = ? COLLATE NOCASE)",
        )
        .bind(username)
        .fetch_one(self.pool)
        .await?;

        Ok(exists)
    }

    /// Set the active flag on a user account.
    ///
    /// Returns true if a user was updated, false if not found.
    pub async fn set_active(&self, id: i64, is_active: bool) -> Result<bool> {
        let result = sqlx::query("UPDATE users SET is_active = ? WHERE id = ?")
            .bind(is_active)
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    fn sample_user(username: &str) -> NewUser {
        NewUser {
            email: format!("{username}@example.com"),
            username: username.to_string(),
            full_name: format!("{username} Fullname"),
            hashed_password: "$argon2id$fake-hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = UserRepository::new(db.pool());

        let user = repo.create(&sample_user("alice")).await.unwrap();
        assert_eq!(user.username, "alice");
        assert!(user.is_active);
        assert!(!user.is_superuser);
        assert!(!user.is_verified);

        let fetched = repo.get_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(fetched.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_get_by_username_case_insensitive() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = UserRepository::new(db.pool());

        repo.create(&sample_user("Bob")).await.unwrap();

        let fetched = repo.get_by_username("bob").await.unwrap();
        assert!(fetched.is_some());
        assert_eq!(fetched.unwrap().username, "Bob");
    }

    #[tokio::test]
    async fn test_duplicate_username_is_conflict() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = UserRepository::new(db.pool());

        repo.create(&sample_user("carol")).await.unwrap();
        let err = repo.create(&sample_user("carol")).await.unwrap_err();
        assert!(matches!(err, PlankError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_set_active() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = UserRepository::new(db.pool());

        let user = repo.create(&sample_user("dave")).await.unwrap();
        assert!(repo.set_active(user.id, false).await.unwrap());

        let fetched = repo.get_by_id(user.id).await.unwrap().unwrap();
        assert!(!fetched.is_active);

        assert!(!repo.set_active(99999, false).await.unwrap());
    }
}
