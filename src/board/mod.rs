//! Boards and posts: types, repositories, and services.

pub mod post;
pub mod post_repository;
pub mod post_service;
pub mod repository;
pub mod service;
pub mod types;

pub use post::Post;
pub use post_repository::PostRepository;
pub use post_service::PostService;
pub use repository::BoardRepository;
pub use service::BoardService;
pub use types::{Board, BoardWithPostCount};
