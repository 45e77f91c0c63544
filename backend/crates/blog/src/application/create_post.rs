//! Create Post Use Case

use std::sync::Arc;

use crate::domain::entity::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::UserId;
use crate::error::BlogResult;

/// Create post input
pub struct CreatePostInput {
    pub owner_id: UserId,
    pub title: String,
    pub content: String,
    pub is_private: bool,
}

/// Create post output
pub struct CreatePostOutput {
    pub post_id: String,
}

/// Create post use case
pub struct CreatePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> CreatePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    /// Create a post owned by the caller.
    ///
    /// Title and content are taken as-is; empty values are allowed.
    pub async fn execute(&self, input: CreatePostInput) -> BlogResult<CreatePostOutput> {
        let post = Post::new(input.owner_id, input.title, input.content, input.is_private);

        self.post_repo.create(&post).await?;

        tracing::info!(
            post_id = %post.post_id,
            owner_id = %post.owner_id,
            is_private = post.is_private,
            "Post created"
        );

        Ok(CreatePostOutput {
            post_id: post.post_id.to_string(),
        })
    }
}
