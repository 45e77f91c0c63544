//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{Comment, CommentWithAuthor, Post, UserSummary};
pub use repository::{CommentRepository, PostRepository, UserDirectory};
pub use value_object::{CommentId, PostId, UserId};
