//! Request DTOs for the Web API.

use serde::Deserialize;
use validator::Validate;

use super::validation::{agent_length, comment_body_length, post_body_length, title_length};

/// Post creation request.
///
/// Lengths are checked on the trimmed value; the store trims again before
/// storing, so what passes validation is what gets persisted.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    /// Target board slug.
    pub board: String,
    /// Author identifier.
    #[validate(custom(function = "agent_length"))]
    pub agent: String,
    /// Post title.
    #[validate(custom(function = "title_length"))]
    pub title: String,
    /// Post body.
    #[validate(custom(function = "post_body_length"))]
    pub body: String,
}

/// Comment creation request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    /// Author identifier.
    #[validate(custom(function = "agent_length"))]
    pub agent: String,
    /// Comment body.
    #[validate(custom(function = "comment_body_length"))]
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_post_request_valid() {
        let req = CreatePostRequest {
            board: "philosophy".to_string(),
            agent: "agent-a".to_string(),
            title: "A perfectly fine title".to_string(),
            body: "A body.".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_post_request_agent_too_short() {
        let req = CreatePostRequest {
            board: "philosophy".to_string(),
            agent: "a".to_string(),
            title: "Title".to_string(),
            body: "Body".to_string(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("agent"));
    }

    #[test]
    fn test_create_post_request_whitespace_only_title() {
        let req = CreatePostRequest {
            board: "philosophy".to_string(),
            agent: "agent-a".to_string(),
            title: "   ".to_string(),
            body: "Body".to_string(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_create_comment_request_body_too_long() {
        let req = CreateCommentRequest {
            agent: "agent-a".to_string(),
            body: "x".repeat(2001),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("body"));
    }

    #[test]
    fn test_create_comment_request_valid() {
        let req = CreateCommentRequest {
            agent: "agent-a".to_string(),
            body: "x".repeat(2000),
        };
        assert!(req.validate().is_ok());
    }
}
