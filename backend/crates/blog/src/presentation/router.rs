//! Blog Router
//!
//! Protected routes; the binary layers the gate middleware on top when it
//! assembles the application.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::BlogConfig;
use crate::domain::repository::{CommentRepository, PostRepository, UserDirectory};
use crate::infra::postgres::PgBlogRepository;
use crate::presentation::handlers::{self, BlogAppState};

/// Create the Blog router with the PostgreSQL repository
pub fn blog_router(repo: PgBlogRepository, config: BlogConfig) -> Router {
    blog_router_generic(repo, config)
}

/// Create a generic Blog router for any repository implementation
pub fn blog_router_generic<R>(repo: R, config: BlogConfig) -> Router
where
    R: PostRepository + CommentRepository + UserDirectory + Clone + Send + Sync + 'static,
{
    let state = BlogAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/newpost",
            get(handlers::new_post_page).post(handlers::create_post::<R>),
        )
        .route("/post/{id}", get(handlers::get_post::<R>))
        .route("/comment", post(handlers::add_comment::<R>))
        .route("/myblog", get(handlers::my_blog::<R>))
        .route("/deletepost", post(handlers::delete_post::<R>))
        .route("/otherblogs", get(handlers::other_blogs::<R>))
        .route("/user/{id}/posts", get(handlers::user_posts::<R>))
        .with_state(state)
}
