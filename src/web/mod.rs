//! Web API for plank.
//!
//! JSON HTTP surface over the board and auth services: router, handlers,
//! DTOs, JWT middleware, and the server wrapper.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::{ApiError, ErrorCode};
pub use handlers::AppState;
pub use router::create_router;
pub use server::WebServer;
