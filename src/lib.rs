//! plank - a small forum backend.
//!
//! Boards are named containers for posts, public or private. Users register
//! accounts, log in for a bearer token, and talk to a JSON HTTP API. Only a
//! resource's creator may change or delete it.

pub mod auth;
pub mod board;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use auth::{
    hash_password, register, validate_password, verify_password, PasswordError, RegistrationError,
    RegistrationRequest,
};
pub use board::{Board, BoardService, BoardWithPostCount, Post, PostService};
pub use config::Config;
pub use db::{Caller, Database, NewUser, User, UserRepository};
pub use error::{PlankError, Result};
pub use web::WebServer;
