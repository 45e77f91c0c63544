//! Application Layer
//!
//! Content use cases, query use cases, and the authorization policy config.

pub mod add_comment;
pub mod config;
pub mod create_post;
pub mod delete_post;
pub mod get_post;
pub mod queries;

// Re-exports
pub use add_comment::{AddCommentInput, AddCommentUseCase};
pub use config::BlogConfig;
pub use create_post::{CreatePostInput, CreatePostOutput, CreatePostUseCase};
pub use delete_post::DeletePostUseCase;
pub use get_post::GetPostUseCase;
pub use queries::{
    GetPostWithCommentsUseCase, ListOtherUsersUseCase, ListOwnPostsUseCase, ListUserPostsUseCase,
    PostWithComments, UserPostsOutput,
};
