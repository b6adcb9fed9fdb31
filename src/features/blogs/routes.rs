use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::blogs::handlers;
use crate::features::blogs::services::BlogService;

/// Create routes for blog posts
///
/// `GET /api/blogs/{key}` reads by slug while `PUT` and `DELETE` on the same path take an id.
pub fn routes(service: Arc<BlogService>) -> Router {
    Router::new()
        .route(
            "/api/blogs",
            get(handlers::list_blogs).post(handlers::create_blog),
        )
        .route("/api/blogs/verify", post(handlers::verify_blog))
        .route("/api/blogs/id/{id}", get(handlers::get_blog))
        .route(
            "/api/blogs/{key}",
            get(handlers::get_blog_by_slug)
                .put(handlers::update_blog)
                .delete(handlers::delete_blog),
        )
        .with_state(service)
}
