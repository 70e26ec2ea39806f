//! Post handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::board::{Post, PostService};
use crate::web::dto::{
    CreatePostRequest, MessageResponse, PostDetailResponse, PostListQuery, UpdatePostRequest,
    ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::middleware::AuthUser;

use super::AppState;

/// POST /posts/create_post - Create a post on a board.
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    ValidatedJson(req): ValidatedJson<CreatePostRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let caller = state.resolve_caller(&claims).await?;
    let post = PostService::new(&state.db)
        .create_post(req.board_id, &req.title, &req.content, &caller)
        .await?;

    Ok(Json(MessageResponse::new(format!(
        "post '{}' created",
        post.title
    ))))
}

/// PUT /posts/update_post/:post_id - Overwrite a post's title and content.
pub async fn update_post(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(post_id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdatePostRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let caller = state.resolve_caller(&claims).await?;
    let post = PostService::new(&state.db)
        .update_post(post_id, &req.title, &req.content, &caller)
        .await?;

    Ok(Json(MessageResponse::new(format!(
        "post '{}' updated",
        post.title
    ))))
}

/// DELETE /posts/delete_post/:post_id - Delete a post.
pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(post_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let caller = state.resolve_caller(&claims).await?;
    PostService::new(&state.db)
        .delete_post(post_id, &caller)
        .await?;

    Ok(Json(MessageResponse::new("post deleted")))
}

/// GET /posts/get_post/:post_id - Fetch one readable post.
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(post_id): Path<i64>,
) -> Result<Json<PostDetailResponse>, ApiError> {
    let caller = state.resolve_caller(&claims).await?;
    let post = PostService::new(&state.db)
        .get_post(post_id, &caller)
        .await?;

    Ok(Json(PostDetailResponse {
        message: format!("post '{}'", post.title),
        post_info: post,
    }))
}

/// GET /posts/list_posts/:board_id - Page through a board's posts.
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(board_id): Path<i64>,
    Query(query): Query<PostListQuery>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let caller = state.resolve_caller(&claims).await?;
    let posts = PostService::new(&state.db)
        .list_posts(board_id, &caller, query.limit, query.offset)
        .await?;

    Ok(Json(posts))
}
