//! Get Post Use Case

use std::sync::Arc;

use crate::application::config::BlogConfig;
use crate::domain::entity::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::{PostId, UserId};
use crate::error::{BlogError, BlogResult};

/// Get post use case
pub struct GetPostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
    config: Arc<BlogConfig>,
}

impl<P> GetPostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>, config: Arc<BlogConfig>) -> Self {
        Self { post_repo, config }
    }

    /// Fetch a single post.
    ///
    /// With visibility enforced, another owner's private post behaves as
    /// absent rather than forbidden, so its existence is not disclosed.
    pub async fn execute(&self, post_id: &PostId, requester: &UserId) -> BlogResult<Post> {
        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(BlogError::PostNotFound)?;

        if self.config.enforce_post_visibility && !post.is_visible_to(requester) {
            return Err(BlogError::PostNotFound);
        }

        Ok(post)
    }
}
