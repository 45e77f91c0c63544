//! HTTP Handlers
//!
//! All routes here sit behind the gate middleware: the authenticated
//! identity arrives as a `CurrentUser` request extension. Form POSTs answer
//! with the redirects a form-driven UI expects; GET endpoints return the
//! JSON the corresponding page renders.

use axum::extract::{Form, Path, State};
use axum::response::Redirect;
use axum::{Extension, Json};
use std::sync::Arc;
use uuid::Uuid;

use auth::presentation::dto::PageResponse;
use auth::presentation::middleware::CurrentUser;

use crate::application::config::BlogConfig;
use crate::application::{
    AddCommentInput, AddCommentUseCase, CreatePostInput, CreatePostUseCase, DeletePostUseCase,
    GetPostWithCommentsUseCase, ListOtherUsersUseCase, ListOwnPostsUseCase, ListUserPostsUseCase,
};
use crate::domain::repository::{CommentRepository, PostRepository, UserDirectory};
use crate::domain::value_object::{PostId, UserId};
use crate::error::BlogResult;
use crate::presentation::dto::{
    CommentForm, DeletePostForm, NewPostForm, OtherUsersResponse, PostListResponse,
    PostWithCommentsResponse, UserPostsResponse,
};

/// Shared state for blog handlers
#[derive(Clone)]
pub struct BlogAppState<R>
where
    R: PostRepository + CommentRepository + UserDirectory + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<BlogConfig>,
}

// ============================================================================
// New Post
// ============================================================================

/// GET /newpost
pub async fn new_post_page() -> Json<PageResponse> {
    Json(PageResponse::new("newpost"))
}

/// POST /newpost
pub async fn create_post<R>(
    State(state): State<BlogAppState<R>>,
    Extension(user): Extension<CurrentUser>,
    Form(form): Form<NewPostForm>,
) -> BlogResult<Redirect>
where
    R: PostRepository + CommentRepository + UserDirectory + Clone + Send + Sync + 'static,
{
    let use_case = CreatePostUseCase::new(state.repo.clone());

    let is_private = form.is_private();
    let input = CreatePostInput {
        owner_id: user.user_id,
        title: form.title,
        content: form.content,
        is_private,
    };

    use_case.execute(input).await?;

    Ok(Redirect::to("/home"))
}

// ============================================================================
// Read Post
// ============================================================================

/// GET /post/{id}
pub async fn get_post<R>(
    State(state): State<BlogAppState<R>>,
    Extension(user): Extension<CurrentUser>,
    Path(post_id): Path<Uuid>,
) -> BlogResult<Json<PostWithCommentsResponse>>
where
    R: PostRepository + CommentRepository + UserDirectory + Clone + Send + Sync + 'static,
{
    let use_case = GetPostWithCommentsUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(&PostId::from_uuid(post_id), &user.user_id)
        .await?;

    Ok(Json(output.into()))
}

// ============================================================================
// Comment
// ============================================================================

/// POST /comment
pub async fn add_comment<R>(
    State(state): State<BlogAppState<R>>,
    Extension(user): Extension<CurrentUser>,
    Form(form): Form<CommentForm>,
) -> BlogResult<Redirect>
where
    R: PostRepository + CommentRepository + UserDirectory + Clone + Send + Sync + 'static,
{
    let use_case = AddCommentUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let input = AddCommentInput {
        post_id: PostId::from_uuid(form.post_id),
        author_id: user.user_id,
        body: form.comment,
    };

    use_case.execute(input).await?;

    Ok(Redirect::to(&format!("/post/{}", form.post_id)))
}

// ============================================================================
// My Blog
// ============================================================================

/// GET /myblog
pub async fn my_blog<R>(
    State(state): State<BlogAppState<R>>,
    Extension(user): Extension<CurrentUser>,
) -> BlogResult<Json<PostListResponse>>
where
    R: PostRepository + CommentRepository + UserDirectory + Clone + Send + Sync + 'static,
{
    let use_case = ListOwnPostsUseCase::new(state.repo.clone());

    let posts = use_case.execute(&user.user_id).await?;

    Ok(Json(PostListResponse {
        posts: posts.into_iter().map(Into::into).collect(),
    }))
}

/// POST /deletepost
pub async fn delete_post<R>(
    State(state): State<BlogAppState<R>>,
    Extension(user): Extension<CurrentUser>,
    Form(form): Form<DeletePostForm>,
) -> BlogResult<Redirect>
where
    R: PostRepository + CommentRepository + UserDirectory + Clone + Send + Sync + 'static,
{
    let use_case = DeletePostUseCase::new(state.repo.clone(), state.config.clone());

    use_case
        .execute(&PostId::from_uuid(form.post_id), &user.user_id)
        .await?;

    Ok(Redirect::to("/myblog"))
}

// ============================================================================
// Other Blogs
// ============================================================================

/// GET /otherblogs
pub async fn other_blogs<R>(
    State(state): State<BlogAppState<R>>,
    Extension(user): Extension<CurrentUser>,
) -> BlogResult<Json<OtherUsersResponse>>
where
    R: PostRepository + CommentRepository + UserDirectory + Clone + Send + Sync + 'static,
{
    let use_case = ListOtherUsersUseCase::new(state.repo.clone());

    let users = use_case.execute(&user.user_id).await?;

    Ok(Json(OtherUsersResponse {
        users: users.into_iter().map(Into::into).collect(),
    }))
}

/// GET /user/{id}/posts
pub async fn user_posts<R>(
    State(state): State<BlogAppState<R>>,
    Extension(user): Extension<CurrentUser>,
    Path(user_id): Path<Uuid>,
) -> BlogResult<Json<UserPostsResponse>>
where
    R: PostRepository + CommentRepository + UserDirectory + Clone + Send + Sync + 'static,
{
    let use_case = ListUserPostsUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(&UserId::from_uuid(user_id), &user.user_id)
        .await?;

    Ok(Json(output.into()))
}
