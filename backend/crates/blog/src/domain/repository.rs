//! Repository Traits
//!
//! Interfaces for blog persistence. The content side (posts, comments) and
//! the query side share these traits and, in production, one Postgres
//! implementation; they never call each other.

use crate::domain::entity::{Comment, CommentWithAuthor, Post, UserSummary};
use crate::domain::value_object::{PostId, UserId};
use crate::error::BlogResult;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Create a new post
    async fn create(&self, post: &Post) -> BlogResult<()>;

    /// Find post by ID
    async fn find_by_id(&self, post_id: &PostId) -> BlogResult<Option<Post>>;

    /// Delete a post and its comments; returns whether a post was removed
    async fn delete(&self, post_id: &PostId) -> BlogResult<bool>;

    /// All posts of one owner, newest first
    async fn list_by_owner(&self, owner_id: &UserId) -> BlogResult<Vec<Post>>;
}

/// Comment repository trait
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    /// Create a new comment
    ///
    /// Returns `PostNotFound` when the referenced post no longer exists
    /// (a concurrent delete loses the race at the foreign key).
    async fn create(&self, comment: &Comment) -> BlogResult<()>;

    /// All comments on a post with author usernames, in insertion order
    async fn list_for_post(&self, post_id: &PostId) -> BlogResult<Vec<CommentWithAuthor>>;
}

/// Read access to users for listings and existence checks
///
/// The blog side never writes users; registration is the auth domain's job.
#[trait_variant::make(UserDirectory: Send)]
pub trait LocalUserDirectory {
    /// Find a user summary by ID
    async fn find_summary(&self, user_id: &UserId) -> BlogResult<Option<UserSummary>>;

    /// All users except the given one, by username
    async fn list_others(&self, user_id: &UserId) -> BlogResult<Vec<UserSummary>>;
}
