//! Comment Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::{CommentId, PostId, UserId};

/// Comment entity
///
/// Every comment references an existing post and an existing user; the
/// database enforces both references.
#[derive(Debug, Clone)]
pub struct Comment {
    pub comment_id: CommentId,
    pub post_id: PostId,
    pub author_id: UserId,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment
    pub fn new(post_id: PostId, author_id: UserId, body: String) -> Self {
        Self {
            comment_id: CommentId::new(),
            post_id,
            author_id,
            body,
            created_at: Utc::now(),
        }
    }
}

/// A comment joined with its author's username, as read back for display
#[derive(Debug, Clone)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author_name: String,
}
