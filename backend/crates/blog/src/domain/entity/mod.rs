//! Entities

pub mod comment;
pub mod post;
pub mod user_summary;

pub use comment::{Comment, CommentWithAuthor};
pub use post::Post;
pub use user_summary::UserSummary;
