//! Delete Post Use Case

use std::sync::Arc;

use crate::application::config::BlogConfig;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::{PostId, UserId};
use crate::error::{BlogError, BlogResult};

/// Delete post use case
pub struct DeletePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
    config: Arc<BlogConfig>,
}

impl<P> DeletePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>, config: Arc<BlogConfig>) -> Self {
        Self { post_repo, config }
    }

    /// Delete a post (and, through the database, its comments).
    ///
    /// With ownership enforced: `PostNotFound` for an absent post,
    /// `Forbidden` for anyone but the owner. Under the permissive policy the
    /// delete is issued blind, and an absent post is not an error.
    pub async fn execute(&self, post_id: &PostId, requester: &UserId) -> BlogResult<()> {
        if self.config.enforce_post_ownership {
            let post = self
                .post_repo
                .find_by_id(post_id)
                .await?
                .ok_or(BlogError::PostNotFound)?;

            if post.owner_id != *requester {
                return Err(BlogError::Forbidden);
            }
        }

        let deleted = self.post_repo.delete(post_id).await?;

        if deleted {
            tracing::info!(post_id = %post_id, requester = %requester, "Post deleted");
        }

        Ok(())
    }
}
