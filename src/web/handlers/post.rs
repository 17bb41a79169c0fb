//! Post handlers for the Web API.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::forum::NewPost;
use crate::web::dto::{CreatePostRequest, PostResponse, ValidatedJson};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// GET /api/posts/:id - Get a single post.
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<PostResponse>, ApiError> {
    let store = state.store.lock().await;
    let post = store
        .post(id)
        .ok_or_else(|| ApiError::not_found("post not found"))?;
    Ok(Json(PostResponse::from(post)))
}

/// POST /api/posts - Create a post.
///
/// Field lengths are checked by the extractor before the handler runs;
/// the store checks the board reference before storing anything, so a
/// rejected request leaves the collections untouched.
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CreatePostRequest>,
) -> Result<Json<PostResponse>, ApiError> {
    let mut store = state.store.lock().await;
    let post = store.create_post(NewPost {
        board: req.board,
        agent: req.agent,
        title: req.title,
        body: req.body,
    })?;

    tracing::info!(post_id = post.id, board = %post.board, "Post created");
    Ok(Json(PostResponse::from(&post)))
}
