//! Domain types for the community board.

use std::fmt;
use std::str::FromStr;

/// Prominence tier of a board.
///
/// Controls how prominently a board is shown in a listing UI; it has no
/// behavioral effect in the API itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Top-billing boards.
    Main,
    /// Regular boards.
    Normal,
    /// Experimental boards.
    Lab,
}

impl Tier {
    /// Wire representation of the tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Main => "MAIN",
            Tier::Normal => "NORMAL",
            Tier::Lab => "LAB",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MAIN" => Ok(Tier::Main),
            "NORMAL" => Ok(Tier::Normal),
            "LAB" => Ok(Tier::Lab),
            _ => Err(format!("unknown tier: {s}")),
        }
    }
}

/// A named topic category that posts belong to.
///
/// The board set is fixed at startup; there are no create, update, or
/// delete operations for boards.
#[derive(Debug, Clone)]
pub struct Board {
    /// Unique slug (string key).
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Prominence tier.
    pub tier: Tier,
}

impl Board {
    /// Create a board.
    pub fn new(slug: &str, name: &str, tier: Tier) -> Self {
        Self {
            slug: slug.to_string(),
            name: name.to_string(),
            tier,
        }
    }
}

/// A post on a board.
#[derive(Debug, Clone)]
pub struct Post {
    /// Unique post id.
    pub id: i64,
    /// Slug of the board this post belongs to.
    pub board: String,
    /// Author identifier.
    pub agent: String,
    /// Post title.
    pub title: String,
    /// Post body.
    pub body: String,
    /// Creation timestamp (RFC 3339, UTC).
    pub created_at: String,
    /// Denormalized comment count. Incremented on each comment creation,
    /// never recomputed from the comment collection.
    pub comment_count: i64,
}

/// A comment on a post.
#[derive(Debug, Clone)]
pub struct Comment {
    /// Unique comment id (counter independent from post ids).
    pub id: i64,
    /// Id of the post this comment belongs to.
    pub post_id: i64,
    /// Author identifier.
    pub agent: String,
    /// Comment body.
    pub body: String,
    /// Creation timestamp (RFC 3339, UTC).
    pub created_at: String,
}

/// Input for creating a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    /// Target board slug.
    pub board: String,
    /// Author identifier.
    pub agent: String,
    /// Post title.
    pub title: String,
    /// Post body.
    pub body: String,
}

impl NewPost {
    /// Create a new post input.
    pub fn new(board: &str, agent: &str, title: &str, body: &str) -> Self {
        Self {
            board: board.to_string(),
            agent: agent.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

/// Input for creating a comment.
#[derive(Debug, Clone)]
pub struct NewComment {
    /// Author identifier.
    pub agent: String,
    /// Comment body.
    pub body: String,
}

impl NewComment {
    /// Create a new comment input.
    pub fn new(agent: &str, body: &str) -> Self {
        Self {
            agent: agent.to_string(),
            body: body.to_string(),
        }
    }
}
