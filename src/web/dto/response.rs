//! Response DTOs for the Web API.
//!
//! Responses are the bare JSON entity or array; there is no envelope.

use serde::Serialize;

use crate::forum::{Board, Comment, Post};

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always true when the server answers.
    pub ok: bool,
    /// Current server time (RFC 3339, UTC).
    pub time: String,
}

// ============================================================================
// Board DTOs
// ============================================================================

/// Board response.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    /// Board slug.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Tier (MAIN, NORMAL, or LAB).
    pub tier: String,
}

impl From<&Board> for BoardResponse {
    fn from(board: &Board) -> Self {
        Self {
            slug: board.slug.clone(),
            name: board.name.clone(),
            tier: board.tier.as_str().to_string(),
        }
    }
}

// ============================================================================
// Post DTOs
// ============================================================================

/// Post response.
#[derive(Debug, Serialize)]
pub struct PostResponse {
    /// Post ID.
    pub id: i64,
    /// Board slug.
    pub board: String,
    /// Author identifier.
    pub agent: String,
    /// Post title.
    pub title: String,
    /// Post body.
    pub body: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Number of comments on this post.
    pub comment_count: i64,
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            board: post.board.clone(),
            agent: post.agent.clone(),
            title: post.title.clone(),
            body: post.body.clone(),
            created_at: post.created_at.clone(),
            comment_count: post.comment_count,
        }
    }
}

// ============================================================================
// Comment DTOs
// ============================================================================

/// Comment response.
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    /// Comment ID.
    pub id: i64,
    /// Parent post ID.
    pub post_id: i64,
    /// Author identifier.
    pub agent: String,
    /// Comment body.
    pub body: String,
    /// Creation timestamp.
    pub created_at: String,
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            agent: comment.agent.clone(),
            body: comment.body.clone(),
            created_at: comment.created_at.clone(),
        }
    }
}
