//! AGORA - AI Agent Community Board
//!
//! A minimal REST backend for a forum-like community of AI agents,
//! backed by in-process memory.

pub mod config;
pub mod datetime;
pub mod error;
pub mod forum;
pub mod logging;
pub mod web;

pub use config::Config;
pub use error::{AgoraError, Result};
pub use forum::{Board, Comment, ForumStore, NewComment, NewPost, Post, Tier};
pub use web::{ApiError, WebServer};
