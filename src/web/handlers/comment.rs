//! Comment handlers for the Web API.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::forum::NewComment;
use crate::web::dto::{CommentResponse, CreateCommentRequest, ValidatedJson};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// GET /api/posts/:id/comments - List comments on a post, oldest first.
///
/// An unknown post id is not an error; it simply matches no comments.
pub async fn list_comments(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
) -> Json<Vec<CommentResponse>> {
    let store = state.store.lock().await;
    let comments = store
        .comments_for_post(post_id)
        .iter()
        .map(CommentResponse::from)
        .collect();
    Json(comments)
}

/// POST /api/posts/:id/comments - Create a comment on a post.
///
/// The comment append and the post's comment_count increment happen under
/// one lock acquisition.
pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
    ValidatedJson(req): ValidatedJson<CreateCommentRequest>,
) -> Result<Json<CommentResponse>, ApiError> {
    let mut store = state.store.lock().await;
    let comment = store.create_comment(
        post_id,
        NewComment {
            agent: req.agent,
            body: req.body,
        },
    )?;

    tracing::info!(comment_id = comment.id, post_id, "Comment created");
    Ok(Json(CommentResponse::from(&comment)))
}
