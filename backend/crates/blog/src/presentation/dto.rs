//! API DTOs (Data Transfer Objects)
//!
//! POST bodies are `application/x-www-form-urlencoded` and mirror the HTML
//! form field names; responses are camelCase JSON.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::queries::{PostWithComments, UserPostsOutput};
use crate::domain::entity::{CommentWithAuthor, Post, UserSummary};

// ============================================================================
// Forms
// ============================================================================

/// New post form body
///
/// `private` is an HTML checkbox: present (any value) means checked.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPostForm {
    pub title: String,
    pub content: String,
    pub private: Option<String>,
}

impl NewPostForm {
    pub fn is_private(&self) -> bool {
        self.private.is_some()
    }
}

/// Comment form body
#[derive(Debug, Clone, Deserialize)]
pub struct CommentForm {
    #[serde(rename = "postId")]
    pub post_id: Uuid,
    pub comment: String,
}

/// Delete post form body
#[derive(Debug, Clone, Deserialize)]
pub struct DeletePostForm {
    #[serde(rename = "postId")]
    pub post_id: Uuid,
}

// ============================================================================
// Responses
// ============================================================================

/// A single post
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub post_id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub content: String,
    pub is_private: bool,
    pub created_at_ms: i64,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            post_id: post.post_id.into_uuid(),
            owner_id: post.owner_id.into_uuid(),
            title: post.title,
            content: post.content,
            is_private: post.is_private,
            created_at_ms: post.created_at.timestamp_millis(),
        }
    }
}

/// A comment with its author's username
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub comment_id: Uuid,
    pub author_name: String,
    pub body: String,
    pub created_at_ms: i64,
}

impl From<CommentWithAuthor> for CommentResponse {
    fn from(entry: CommentWithAuthor) -> Self {
        Self {
            comment_id: entry.comment.comment_id.into_uuid(),
            author_name: entry.author_name,
            body: entry.comment.body,
            created_at_ms: entry.comment.created_at.timestamp_millis(),
        }
    }
}

/// One post plus its comments in insertion order
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostWithCommentsResponse {
    pub post: PostResponse,
    pub comments: Vec<CommentResponse>,
}

impl From<PostWithComments> for PostWithCommentsResponse {
    fn from(output: PostWithComments) -> Self {
        Self {
            post: output.post.into(),
            comments: output.comments.into_iter().map(Into::into).collect(),
        }
    }
}

/// The caller's own posts
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
}

/// A user in a listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryResponse {
    pub user_id: Uuid,
    pub user_name: String,
}

impl From<UserSummary> for UserSummaryResponse {
    fn from(user: UserSummary) -> Self {
        Self {
            user_id: user.user_id.into_uuid(),
            user_name: user.user_name,
        }
    }
}

/// All other authors
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherUsersResponse {
    pub users: Vec<UserSummaryResponse>,
}

/// Another user's posts
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPostsResponse {
    pub user: UserSummaryResponse,
    pub posts: Vec<PostResponse>,
}

impl From<UserPostsOutput> for UserPostsResponse {
    fn from(output: UserPostsOutput) -> Self {
        Self {
            user: output.user.into(),
            posts: output.posts.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_form_checkbox_semantics() {
        let checked: NewPostForm =
            serde_urlencoded::from_str("title=t&content=c&private=on").unwrap();
        assert!(checked.is_private());

        let unchecked: NewPostForm = serde_urlencoded::from_str("title=t&content=c").unwrap();
        assert!(!unchecked.is_private());

        // Any value counts as checked, matching browser behavior
        let odd: NewPostForm =
            serde_urlencoded::from_str("title=t&content=c&private=false").unwrap();
        assert!(odd.is_private());
    }

    #[test]
    fn test_comment_form_field_names() {
        let id = Uuid::new_v4();
        let body = format!("postId={}&comment=hi", id);
        let form: CommentForm = serde_urlencoded::from_str(&body).unwrap();
        assert_eq!(form.post_id, id);
        assert_eq!(form.comment, "hi");
    }

    #[test]
    fn test_post_response_is_camel_case() {
        let post = Post::new(
            crate::domain::value_object::UserId::new(),
            "title".to_string(),
            "content".to_string(),
            true,
        );
        let json = serde_json::to_string(&PostResponse::from(post)).unwrap();
        assert!(json.contains("postId"));
        assert!(json.contains("ownerId"));
        assert!(json.contains("isPrivate"));
        assert!(json.contains("createdAtMs"));
    }
}
