//! Request handlers for the Web API.

pub mod auth;
pub mod board;
pub mod post;

pub use auth::{login, me, register};
pub use board::{create_board, delete_board, get_board, list_boards, update_board};
pub use post::{create_post, delete_post, get_post, list_posts, update_post};

use jsonwebtoken::{encode, EncodingKey, Header};

use crate::db::{Caller, Database, UserRepository};
use crate::web::error::ApiError;
use crate::web::middleware::JwtClaims;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database handle.
    pub db: Database,
    /// JWT encoding key.
    pub encoding_key: EncodingKey,
    /// Access token expiry in seconds.
    pub access_token_expiry: u64,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Database, jwt_secret: &str, access_token_expiry: u64) -> Self {
        Self {
            db,
            encoding_key: EncodingKey::from_secret(jwt_secret.as_bytes()),
            access_token_expiry,
        }
    }

    /// Generate an access token for a user.
    pub fn generate_access_token(&self, user_id: i64, username: &str) -> Result<String, ApiError> {
        let now = chrono::Utc::now().timestamp() as u64;
        let claims = JwtClaims {
            sub: user_id,
            username: username.to_string(),
            iat: now,
            exp: now + self.access_token_expiry,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to encode JWT: {}", e);
            ApiError::internal("failed to generate token")
        })
    }

    /// Resolve the caller record behind a set of verified claims.
    ///
    /// The token can outlive its account; a subject with no user row is
    /// treated as unauthenticated.
    pub async fn resolve_caller(&self, claims: &JwtClaims) -> Result<Caller, ApiError> {
        let repo = UserRepository::new(self.db.pool());
        let user = repo
            .get_by_id(claims.sub)
            .await
            .map_err(ApiError::from)?
            .ok_or_else(|| ApiError::unauthorized("unknown user"))?;
        Ok(user.caller())
    }
}
