//! Request DTOs for the Web API.
//!
//! Structural validation (empty strings, length caps) happens here through
//! `ValidatedJson`; business rules such as uniqueness live in the services.

use serde::Deserialize;
use validator::Validate;

use super::validation::non_blank;

/// User registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address.
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// Username.
    #[validate(custom(function = non_blank))]
    pub username: String,
    /// Display name.
    #[validate(custom(function = non_blank))]
    pub full_name: String,
    /// Plaintext password.
    #[validate(custom(function = non_blank))]
    pub password: String,
}

/// Login request.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(custom(function = non_blank))]
    pub username: String,
    /// Password.
    #[validate(custom(function = non_blank))]
    pub password: String,
}

fn default_public() -> bool {
    true
}

/// Board creation request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBoardRequest {
    /// Board name.
    #[validate(custom(function = non_blank))]
    pub name: String,
    /// Whether the board is visible to everyone. Defaults to public.
    #[serde(default = "default_public")]
    pub public: bool,
}

/// Board update request. Both fields are overwritten.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBoardRequest {
    /// New board name.
    #[validate(custom(function = non_blank))]
    pub name: String,
    /// New publicity flag.
    pub public: bool,
}

/// Post creation request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    /// Board to post on.
    pub board_id: i64,
    /// Post title.
    #[validate(custom(function = non_blank))]
    pub title: String,
    /// Post body.
    #[serde(default)]
    pub content: String,
}

/// Post update request. Both fields are overwritten.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePostRequest {
    /// New post title.
    #[validate(custom(function = non_blank))]
    pub title: String,
    /// New post body.
    #[serde(default)]
    pub content: String,
}

fn default_limit() -> i64 {
    10
}

/// Query parameters for post listings.
#[derive(Debug, Deserialize)]
pub struct PostListQuery {
    /// Page size, 1-100.
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Number of posts to skip.
    #[serde(default)]
    pub offset: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_board_defaults_to_public() {
        let req: CreateBoardRequest = serde_json::from_str(r#"{"name": "tech"}"#).unwrap();
        assert!(req.public);

        let req: CreateBoardRequest =
            serde_json::from_str(r#"{"name": "tech", "public": false}"#).unwrap();
        assert!(!req.public);
    }

    #[test]
    fn test_post_list_query_defaults() {
        let q: PostListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.limit, 10);
        assert_eq!(q.offset, 0);
    }

    #[test]
    fn test_register_request_validation() {
        let req = RegisterRequest {
            email: "not-an-email".to_string(),
            username: "alice".to_string(),
            full_name: String::new(),
            password: "secret".to_string(),
        };
        assert!(req.validate().is_err());

        let req = RegisterRequest {
            email: "alice@example.com".to_string(),
            username: "   ".to_string(),
            full_name: String::new(),
            password: "secret".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
