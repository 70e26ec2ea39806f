//! Response DTOs for the Web API.
//!
//! Board and post rows serialize straight from the domain types; the types
//! here cover the remaining wire shapes.

use serde::Serialize;

use crate::board::Post;
use crate::db::User;

/// Simple acknowledgement body returned by mutating endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable result message.
    pub message: String,
}

impl MessageResponse {
    /// Create a new message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Login response carrying a bearer token.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Access token (JWT).
    pub access_token: String,
    /// Token type, always "bearer".
    pub token_type: &'static str,
}

impl LoginResponse {
    /// Create a new login response.
    pub fn new(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer",
        }
    }
}

/// User information in responses. Never includes the password hash.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// User ID.
    pub id: i64,
    /// Email address.
    pub email: String,
    /// Username.
    pub username: String,
    /// Display name.
    pub full_name: String,
    /// Whether the account is active.
    pub is_active: bool,
    /// Whether the account is a superuser.
    pub is_superuser: bool,
    /// Whether the email address is verified.
    pub is_verified: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            username: user.username.clone(),
            full_name: user.full_name.clone(),
            is_active: user.is_active,
            is_superuser: user.is_superuser,
            is_verified: user.is_verified,
        }
    }
}

/// Body returned by the single-post read endpoint.
#[derive(Debug, Serialize)]
pub struct PostDetailResponse {
    /// Result message.
    pub message: String,
    /// The post record.
    pub post_info: Post,
}
