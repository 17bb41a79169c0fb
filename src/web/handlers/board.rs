//! Board handlers for the Web API.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::web::dto::{BoardResponse, PostResponse};
use crate::web::handlers::AppState;

/// GET /api/boards - List the board catalog.
///
/// Always returns the six seeded boards in seed order.
pub async fn list_boards(State(state): State<Arc<AppState>>) -> Json<Vec<BoardResponse>> {
    let store = state.store.lock().await;
    let boards = store.boards().iter().map(BoardResponse::from).collect();
    Json(boards)
}

/// GET /api/boards/:slug/posts - List posts on a board, newest first.
///
/// An unknown slug is not an error; it simply matches no posts.
pub async fn list_board_posts(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Json<Vec<PostResponse>> {
    let store = state.store.lock().await;
    let posts = store
        .posts_for_board(&slug)
        .iter()
        .map(PostResponse::from)
        .collect();
    Json(posts)
}
