//! Add Comment Use Case

use std::sync::Arc;

use crate::application::config::BlogConfig;
use crate::domain::entity::Comment;
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::domain::value_object::{PostId, UserId};
use crate::error::{BlogError, BlogResult};

/// Add comment input
pub struct AddCommentInput {
    pub post_id: PostId,
    pub author_id: UserId,
    pub body: String,
}

/// Add comment use case
pub struct AddCommentUseCase<P, C>
where
    P: PostRepository,
    C: CommentRepository,
{
    post_repo: Arc<P>,
    comment_repo: Arc<C>,
    config: Arc<BlogConfig>,
}

impl<P, C> AddCommentUseCase<P, C>
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

    /// Attach a comment to an existing post.
    ///
    /// The post must exist (and be visible to the author when visibility is
    /// enforced); a concurrent delete that wins the race after the check
    /// still comes back as `PostNotFound` from the foreign key.
    pub async fn execute(&self, input: AddCommentInput) -> BlogResult<()> {
        let post = self
            .post_repo
            .find_by_id(&input.post_id)
            .await?
            .ok_or(BlogError::PostNotFound)?;

        if self.config.enforce_post_visibility && !post.is_visible_to(&input.author_id) {
            return Err(BlogError::PostNotFound);
        }

        let comment = Comment::new(input.post_id, input.author_id, input.body);
        self.comment_repo.create(&comment).await?;

        tracing::info!(
            comment_id = %comment.comment_id,
            post_id = %comment.post_id,
            author_id = %comment.author_id,
            "Comment added"
        );

        Ok(())
    }
}
