//! Authentication handlers.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::auth::{self, verify_password, RegistrationRequest};
use crate::db::UserRepository;
use crate::web::dto::{
    LoginRequest, LoginResponse, RegisterRequest, UserResponse, ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::middleware::AuthUser;

use super::AppState;

/// POST /auth/register - Create a new account.
pub async fn register(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let repo = UserRepository::new(state.db.pool());
    let request = RegistrationRequest::new(req.email, req.username, req.full_name, req.password);
    let user = auth::register(&repo, request)
        .await
        .map_err(crate::PlankError::from)?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// POST /auth/jwt/login - Exchange credentials for a bearer token.
pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let repo = UserRepository::new(state.db.pool());
    let user = repo
        .get_by_username(&req.username)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::unauthorized("invalid username or password"))?;

    verify_password(&req.password, &user.hashed_password)
        .map_err(|_| ApiError::unauthorized("invalid username or password"))?;

    // Deactivated accounts keep their login; their board view narrows to
    // public boards only.
    let access_token = state.generate_access_token(user.id, &user.username)?;

    Ok(Json(LoginResponse::new(access_token)))
}

/// GET /auth/me - Return the authenticated user's record.
pub async fn me(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let repo = UserRepository::new(state.db.pool());
    let user = repo
        .get_by_id(claims.sub)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::unauthorized("unknown user"))?;

    Ok(Json(UserResponse::from(&user)))
}
