//! Request body validation for the Web API.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::{async_trait, Json};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError};

use crate::web::error::ApiError;

/// JSON extractor that runs `validator` checks after deserializing.
///
/// A body that fails to parse is a 400; one that parses but breaks a
/// validation rule is a 422 naming the offending fields.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = match Json::<T>::from_request(req, state).await {
            Ok(Json(body)) => body,
            Err(rejection) => {
                return Err(ApiError::bad_request(format!("invalid JSON: {rejection}")))
            }
        };

        body.validate().map_err(ApiError::from_validation_errors)?;
        Ok(ValidatedJson(body))
    }
}

/// Reject strings that are empty or all whitespace.
pub fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("non_blank").with_message("must not be empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank_accepts_content() {
        assert!(non_blank("boards").is_ok());
        assert!(non_blank("  padded  ").is_ok());
    }

    #[test]
    fn test_non_blank_rejects_whitespace() {
        for s in ["", " ", "   ", "\t", "\n\r"] {
            assert!(non_blank(s).is_err(), "{s:?} should be rejected");
        }
    }
}
