//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{Comment, CommentWithAuthor, Post, UserSummary};
use crate::domain::repository::{CommentRepository, PostRepository, UserDirectory};
use crate::domain::value_object::{CommentId, PostId, UserId};
use crate::error::{BlogError, BlogResult};

/// PostgreSQL-backed blog repository
///
/// One implementation serves posts, comments, and the read-only user
/// directory; the `users` table itself is owned by the auth side.
#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgBlogRepository {
    async fn create(&self, post: &Post) -> BlogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                post_id,
                owner_id,
                title,
                content,
                is_private,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(post.owner_id.as_uuid())
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.is_private)
        .bind(post.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> BlogResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                post_id,
                owner_id,
                title,
                content,
                is_private,
                created_at
            FROM posts
            WHERE post_id = $1
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn delete(&self, post_id: &PostId) -> BlogResult<bool> {
        // Comments go with the post via ON DELETE CASCADE
        let deleted = sqlx::query("DELETE FROM posts WHERE post_id = $1")
            .bind(post_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> BlogResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                post_id,
                owner_id,
                title,
                content,
                is_private,
                created_at
            FROM posts
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }
}

// ============================================================================
// Comment Repository Implementation
// ============================================================================

impl CommentRepository for PgBlogRepository {
    async fn create(&self, comment: &Comment) -> BlogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (
                comment_id,
                post_id,
                author_id,
                body,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.comment_id.as_uuid())
        .bind(comment.post_id.as_uuid())
        .bind(comment.author_id.as_uuid())
        .bind(&comment.body)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            // foreign_key_violation: the post was deleted between the
            // existence check and this insert
            sqlx::Error::Database(db) if db.code().as_deref() == Some("23503") => {
                BlogError::PostNotFound
            }
            _ => BlogError::Database(e),
        })?;

        Ok(())
    }

    async fn list_for_post(&self, post_id: &PostId) -> BlogResult<Vec<CommentWithAuthor>> {
        let rows = sqlx::query_as::<_, CommentWithAuthorRow>(
            r#"
            SELECT
                c.comment_id,
                c.post_id,
                c.author_id,
                c.body,
                c.created_at,
                u.user_name AS author_name
            FROM comments c
            JOIN users u ON u.user_id = c.author_id
            WHERE c.post_id = $1
            ORDER BY c.created_at ASC
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(CommentWithAuthorRow::into_comment_with_author)
            .collect())
    }
}

// ============================================================================
// User Directory Implementation
// ============================================================================

impl UserDirectory for PgBlogRepository {
    async fn find_summary(&self, user_id: &UserId) -> BlogResult<Option<UserSummary>> {
        let row = sqlx::query_as::<_, UserSummaryRow>(
            r#"
            SELECT
                user_id,
                user_name
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserSummaryRow::into_user_summary))
    }

    async fn list_others(&self, user_id: &UserId) -> BlogResult<Vec<UserSummary>> {
        let rows = sqlx::query_as::<_, UserSummaryRow>(
            r#"
            SELECT
                user_id,
                user_name
            FROM users
            WHERE user_id <> $1
            ORDER BY user_name ASC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(UserSummaryRow::into_user_summary)
            .collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    owner_id: Uuid,
    title: String,
    content: String,
    is_private: bool,
    created_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            post_id: PostId::from_uuid(self.post_id),
            owner_id: UserId::from_uuid(self.owner_id),
            title: self.title,
            content: self.content,
            is_private: self.is_private,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentWithAuthorRow {
    comment_id: Uuid,
    post_id: Uuid,
    author_id: Uuid,
    body: String,
    created_at: DateTime<Utc>,
    author_name: String,
}

impl CommentWithAuthorRow {
    fn into_comment_with_author(self) -> CommentWithAuthor {
        CommentWithAuthor {
            comment: Comment {
                comment_id: CommentId::from_uuid(self.comment_id),
                post_id: PostId::from_uuid(self.post_id),
                author_id: UserId::from_uuid(self.author_id),
                body: self.body,
                created_at: self.created_at,
            },
            author_name: self.author_name,
        }
    }
}

#[derive(sqlx::FromRow)]
struct UserSummaryRow {
    user_id: Uuid,
    user_name: String,
}

impl UserSummaryRow {
    fn into_user_summary(self) -> UserSummary {
        UserSummary {
            user_id: UserId::from_uuid(self.user_id),
            user_name: self.user_name,
        }
    }
}
