//! Value Objects

pub mod comment_id;
pub mod post_id;

pub use comment_id::CommentId;
pub use post_id::PostId;

// The blog domain shares the user identity type with the auth domain
pub use auth::domain::value_object::user_id::UserId;
