//! Query Use Cases
//!
//! Read-only listings backing the authenticated pages. These share the
//! storage with the content use cases but never call them.

use std::sync::Arc;

use crate::application::config::BlogConfig;
use crate::domain::entity::{CommentWithAuthor, Post, UserSummary};
use crate::domain::repository::{CommentRepository, PostRepository, UserDirectory};
use crate::domain::value_object::{PostId, UserId};
use crate::error::{BlogError, BlogResult};

// ============================================================================
// List Own Posts
// ============================================================================

/// List the caller's own posts, newest first
pub struct ListOwnPostsUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> ListOwnPostsUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, owner_id: &UserId) -> BlogResult<Vec<Post>> {
        self.post_repo.list_by_owner(owner_id).await
    }
}

// ============================================================================
// List Other Users
// ============================================================================

/// List every user except the caller
pub struct ListOtherUsersUseCase<D>
where
    D: UserDirectory,
{
    directory: Arc<D>,
}

impl<D> ListOtherUsersUseCase<D>
where
    D: UserDirectory,
{
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    pub async fn execute(&self, caller: &UserId) -> BlogResult<Vec<UserSummary>> {
        self.directory.list_others(caller).await
    }
}

// ============================================================================
// List a User's Posts
// ============================================================================

/// List another user's posts
pub struct ListUserPostsUseCase<P, D>
where
    P: PostRepository,
    D: UserDirectory,
{
    post_repo: Arc<P>,
    directory: Arc<D>,
    config: Arc<BlogConfig>,
}

/// A user's posts together with who they belong to
#[derive(Debug)]
pub struct UserPostsOutput {
    pub user: UserSummary,
    pub posts: Vec<Post>,
}

impl<P, D> ListUserPostsUseCase<P, D>
where
    P: PostRepository,
    D: UserDirectory,
{
    pub fn new(post_repo: Arc<P>, directory: Arc<D>, config: Arc<BlogConfig>) -> Self {
        Self {
            post_repo,
            directory,
            config,
        }
    }

    /// `UserNotFound` when no such user exists. With visibility enforced,
    /// another owner's private posts are filtered out of the listing.
    pub async fn execute(&self, target: &UserId, requester: &UserId) -> BlogResult<UserPostsOutput> {
        let user = self
            .directory
            .find_summary(target)
            .await?
            .ok_or(BlogError::UserNotFound)?;

        let mut posts = self.post_repo.list_by_owner(target).await?;

        if self.config.enforce_post_visibility {
            posts.retain(|post| post.is_visible_to(requester));
        }

        Ok(UserPostsOutput { user, posts })
    }
}

// ============================================================================
// Get Post With Comments
// ============================================================================

/// Fetch one post plus its comments joined with author usernames
pub struct GetPostWithCommentsUseCase<P, C>
where
    P: PostRepository,
    C: CommentRepository,
{
    post_repo: Arc<P>,
    comment_repo: Arc<C>,
    config: Arc<BlogConfig>,
}

/// A post and its comments in insertion order
pub struct PostWithComments {
    pub post: Post,
    pub comments: Vec<CommentWithAuthor>,
}

impl<P, C> GetPostWithCommentsUseCase<P, C>
where
    P: PostRepository,
    C: CommentRepository,
{
    pub fn new(post_repo: Arc<P>, comment_repo: Arc<C>, config: Arc<BlogConfig>) -> Self {
        Self {
            post_repo,
            comment_repo,
            config,
        }
    }

    pub async fn execute(
        &self,
        post_id: &PostId,
        requester: &UserId,
    ) -> BlogResult<PostWithComments> {
        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(BlogError::PostNotFound)?;

        if self.config.enforce_post_visibility && !post.is_visible_to(requester) {
            return Err(BlogError::PostNotFound);
        }

        let comments = self.comment_repo.list_for_post(post_id).await?;

        Ok(PostWithComments { post, comments })
    }
}
