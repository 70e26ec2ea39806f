//! Board handlers.
//!
//! Mutations answer with a `{message}` body; the single-board read answers
//! with a one-element array of board rows, and the listing with a bare array.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::board::{Board, BoardService, BoardWithPostCount};
use crate::web::dto::{CreateBoardRequest, MessageResponse, UpdateBoardRequest, ValidatedJson};
use crate::web::error::ApiError;
use crate::web::middleware::AuthUser;

use super::AppState;

/// POST /boards/create_board - Create a board owned by the caller.
pub async fn create_board(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    ValidatedJson(req): ValidatedJson<CreateBoardRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let caller = state.resolve_caller(&claims).await?;
    let board = BoardService::new(&state.db)
        .create_board(&req.name, req.public, &caller)
        .await?;

    Ok(Json(MessageResponse::new(format!(
        "board '{}' created",
        board.name
    ))))
}

/// PUT /boards/update_board/:board_id - Overwrite a board's name and publicity.
pub async fn update_board(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(board_id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateBoardRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let caller = state.resolve_caller(&claims).await?;
    let board = BoardService::new(&state.db)
        .update_board(board_id, &req.name, req.public, &caller)
        .await?;

    Ok(Json(MessageResponse::new(format!(
        "board '{}' updated",
        board.name
    ))))
}

/// DELETE /boards/delete_board/:board_id - Delete a board and its posts.
pub async fn delete_board(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(board_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let caller = state.resolve_caller(&claims).await?;
    BoardService::new(&state.db)
        .delete_board(board_id, &caller)
        .await?;

    Ok(Json(MessageResponse::new("board deleted")))
}

/// GET /boards/get_board/:board_id - Fetch one visible board.
pub async fn get_board(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(board_id): Path<i64>,
) -> Result<Json<Vec<Board>>, ApiError> {
    let caller = state.resolve_caller(&claims).await?;
    let board = BoardService::new(&state.db)
        .get_board(board_id, &caller)
        .await?;

    Ok(Json(vec![board]))
}

/// GET /boards/list_boards - List visible boards with post counts.
pub async fn list_boards(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
) -> Result<Json<Vec<BoardWithPostCount>>, ApiError> {
    let caller = state.resolve_caller(&claims).await?;
    let boards = BoardService::new(&state.db).list_boards(&caller).await?;

    Ok(Json(boards))
}
