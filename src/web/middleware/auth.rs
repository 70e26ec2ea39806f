//! JWT bearer authentication for the Web API.
//!
//! `AppState` holds the encoding side; this module carries the verification
//! state, the claims shape, and the `AuthUser` extractor handlers take to
//! require a logged-in caller.

use std::sync::Arc;

use axum::async_trait;
use axum::body::Body;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::web::error::ApiError;

/// Claims carried in an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject: the user id.
    pub sub: i64,
    /// Username at issue time.
    pub username: String,
    /// Issued-at (unix seconds).
    pub iat: u64,
    /// Expiry (unix seconds).
    pub exp: u64,
    /// Token id.
    pub jti: String,
}

/// Verification half of the JWT setup, injected into request extensions.
#[derive(Clone)]
pub struct JwtState {
    /// Decoding key derived from the configured secret.
    pub decoding_key: DecodingKey,
    /// Validation settings (expiry is always checked).
    pub validation: Validation,
}

impl JwtState {
    /// Create verification state from the shared secret.
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::default();
        validation.validate_exp = true;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verify a bearer token and return its claims.
    pub fn verify(&self, token: &str) -> Result<JwtClaims, ApiError> {
        decode::<JwtClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("token rejected: {e}");
                ApiError::unauthorized("invalid or expired token")
            })
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Extractor for authenticated requests.
///
/// Handlers taking this require a valid `Authorization: Bearer` token and
/// receive the decoded claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub JwtClaims);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .map(str::to_owned)
            .ok_or_else(|| ApiError::unauthorized("missing authorization"))?;

        // Installed by the jwt_auth middleware layer
        let jwt_state = parts
            .extensions
            .get::<Arc<JwtState>>()
            .ok_or_else(|| ApiError::internal("JWT state not configured"))?;

        jwt_state.verify(&token).map(AuthUser)
    }
}

/// Middleware that makes the verification state visible to extractors.
pub async fn jwt_auth(jwt_state: Arc<JwtState>, mut request: Request<Body>, next: Next) -> Response {
    request.extensions_mut().insert(jwt_state);
    next.run(request).await
}
