//! Post Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::{PostId, UserId};

/// Blog post entity
///
/// Title and content are stored verbatim; empty values are accepted.
#[derive(Debug, Clone)]
pub struct Post {
    pub post_id: PostId,
    /// The author who owns this post
    pub owner_id: UserId,
    pub title: String,
    pub content: String,
    /// Private posts are meant for the owner's eyes only; whether that is
    /// enforced is a policy decision made in the application layer
    pub is_private: bool,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post
    pub fn new(owner_id: UserId, title: String, content: String, is_private: bool) -> Self {
        Self {
            post_id: PostId::new(),
            owner_id,
            title,
            content,
            is_private,
            created_at: Utc::now(),
        }
    }

    /// Whether `user` may see this post under the enforced visibility rule
    pub fn is_visible_to(&self, user: &UserId) -> bool {
        !self.is_private || self.owner_id == *user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_post_is_visible_to_everyone() {
        let owner = UserId::new();
        let other = UserId::new();
        let post = Post::new(owner, "t".to_string(), "c".to_string(), false);

        assert!(post.is_visible_to(&owner));
        assert!(post.is_visible_to(&other));
    }

    #[test]
    fn test_private_post_is_visible_to_owner_only() {
        let owner = UserId::new();
        let other = UserId::new();
        let post = Post::new(owner, "t".to_string(), "c".to_string(), true);

        assert!(post.is_visible_to(&owner));
        assert!(!post.is_visible_to(&other));
    }

    #[test]
    fn test_empty_title_and_content_are_accepted() {
        let post = Post::new(UserId::new(), String::new(), String::new(), false);
        assert!(post.title.is_empty());
        assert!(post.content.is_empty());
    }
}
