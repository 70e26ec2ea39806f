//! User registration for plank.

use thiserror::Error;
use tracing::info;

use crate::auth::{hash_password, PasswordError};
use crate::db::{NewUser, User, UserRepository};
use crate::PlankError;

/// Minimum username length.
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Maximum username length.
pub const MAX_USERNAME_LENGTH: usize = 32;

/// Maximum full name length.
pub const MAX_FULL_NAME_LENGTH: usize = 100;

/// Registration-specific errors.
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// Validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Username already exists.
    #[error("username already exists")]
    UsernameExists,

    /// Password hashing failed.
    #[error("password error: {0}")]
    Password(#[from] PasswordError),

    /// Database error.
    #[error("database error: {0}")]
    Database(String),
}

impl From<RegistrationError> for PlankError {
    fn from(e: RegistrationError) -> Self {
        match e {
            RegistrationError::Validation(msg) => PlankError::Validation(msg),
            RegistrationError::UsernameExists => {
                PlankError::Conflict("username already exists".to_string())
            }
            RegistrationError::Password(err) => PlankError::Validation(err.to_string()),
            RegistrationError::Database(msg) => PlankError::Database(msg),
        }
    }
}

/// Registration request data.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    /// Email address.
    pub email: String,
    /// Desired username (3-32 chars, alphanumeric + underscore).
    pub username: String,
    /// Full display name (1-100 characters).
    pub full_name: String,
    /// Password (8-128 characters).
    pub password: String,
}

impl RegistrationRequest {
    /// Create a new registration request.
    pub fn new(
        email: impl Into<String>,
        username: impl Into<String>,
        full_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            username: username.into(),
            full_name: full_name.into(),
            password: password.into(),
        }
    }
}

/// Validate a username: 3-32 characters, alphanumeric or underscore.
fn validate_username(username: &str) -> Result<(), RegistrationError> {
    let char_count = username.chars().count();
    if char_count < MIN_USERNAME_LENGTH {
        return Err(RegistrationError::Validation(format!(
            "username must be at least {MIN_USERNAME_LENGTH} characters"
        )));
    }
    if char_count > MAX_USERNAME_LENGTH {
        return Err(RegistrationError::Validation(format!(
            "username must be at most {MAX_USERNAME_LENGTH} characters"
        )));
    }
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(RegistrationError::Validation(
            "username may only contain letters, digits, and underscores".to_string(),
        ));
    }
    Ok(())
}

/// Validate an email address. A full RFC check is not attempted, only the
/// obvious shape: something, an @, something.
fn validate_email(email: &str) -> Result<(), RegistrationError> {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(RegistrationError::Validation(
            "invalid email address".to_string(),
        ));
    }
    Ok(())
}

/// Validate a full name: non-empty, at most 100 characters.
fn validate_full_name(full_name: &str) -> Result<(), RegistrationError> {
    if full_name.trim().is_empty() {
        return Err(RegistrationError::Validation(
            "full name must not be empty".to_string(),
        ));
    }
    if full_name.chars().count() > MAX_FULL_NAME_LENGTH {
        return Err(RegistrationError::Validation(format!(
            "full name must be at most {MAX_FULL_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Register a new user.
///
/// This function:
/// 1. Validates all input fields
/// 2. Checks if the username already exists
/// 3. Hashes the password
/// 4. Creates the user in the database
///
/// New accounts start active, not superuser, not verified.
pub async fn register(
    repo: &UserRepository<'_>,
    request: RegistrationRequest,
) -> Result<User, RegistrationError> {
    validate_username(&request.username)?;
    validate_email(&request.email)?;
    validate_full_name(&request.full_name)?;

    if repo
        .username_exists(&request.username)
        .await
        .map_err(|e| RegistrationError::Database(e.to_string()))?
    {
        return Err(RegistrationError::UsernameExists);
    }

    let hashed_password = hash_password(&request.password)?;

    let new_user = NewUser {
        email: request.email,
        username: request.username,
        full_name: request.full_name,
        hashed_password,
    };

    let user = match repo.create(&new_user).await {
        Ok(user) => user,
        // The UNIQUE index on username is the last word; a concurrent
        // registration that slipped past the pre-check lands here.
        Err(PlankError::Conflict(_)) => return Err(RegistrationError::UsernameExists),
        Err(e) => return Err(RegistrationError::Database(e.to_string())),
    };

    info!("Registered new user: {} (id {})", user.username, user.id);
    Ok(user)
}
