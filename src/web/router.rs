//! Router configuration for the Web API.

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_board, create_post, delete_board, delete_post, get_board, get_post, list_boards,
    list_posts, login, me, register, update_board, update_post, AppState,
};
use super::middleware::{create_cors_layer, jwt_auth, JwtState};

/// Create the main API router.
pub fn create_router(
    app_state: Arc<AppState>,
    jwt_state: Arc<JwtState>,
    cors_origins: &[String],
) -> Router {
    let auth_routes = Router::new()
        .route("/register", post(register))
        .route("/jwt/login", post(login))
        .route("/me", get(me));

    let board_routes = Router::new()
        .route("/create_board", post(create_board))
        .route("/update_board/:board_id", put(update_board))
        .route("/delete_board/:board_id", delete(delete_board))
        .route("/get_board/:board_id", get(get_board))
        .route("/list_boards", get(list_boards));

    let post_routes = Router::new()
        .route("/create_post", post(create_post))
        .route("/update_post/:post_id", put(update_post))
        .route("/delete_post/:post_id", delete(delete_post))
        .route("/get_post/:post_id", get(get_post))
        .route("/list_posts/:board_id", get(list_posts));

    let jwt_state_for_middleware = jwt_state.clone();

    Router::new()
        .nest("/auth", auth_routes)
        .nest("/boards", board_routes)
        .nest("/posts", post_routes)
        .route("/health", get(health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins))
                .layer(middleware::from_fn(move |req, next| {
                    let state = jwt_state_for_middleware.clone();
                    jwt_auth(state, req, next)
                })),
        )
        .with_state(app_state)
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
