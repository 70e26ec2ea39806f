//! Authentication module for plank.
//!
//! This module provides password hashing and user registration. Token
//! issuance and verification live in the web layer.

mod password;
mod registration;

pub use password::{
    hash_password, validate_password, verify_password, PasswordError, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH,
};
pub use registration::{register, RegistrationError, RegistrationRequest};
