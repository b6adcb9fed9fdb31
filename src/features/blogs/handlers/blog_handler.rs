use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::blogs::dtos::{
    BlogResponseDto, BlogVerificationDto, CreateBlogDto, UpdateBlogDto, VerifyBlogDto,
};
use crate::features::blogs::services::BlogService;
use crate::shared::types::ApiResponse;

/// List all blog posts, newest first
#[utoipa::path(
    get,
    path = "/api/blogs",
    responses(
        (status = 200, description = "List of blog posts", body = ApiResponse<Vec<BlogResponseDto>>),
    ),
    tag = "blogs"
)]
pub async fn list_blogs(
    State(service): State<Arc<BlogService>>,
) -> Result<Json<ApiResponse<Vec<BlogResponseDto>>>> {
    let blogs = service.list().await?;
    let len = blogs.len();
    Ok(Json(ApiResponse::list(blogs, len)))
}

/// Get a blog post by slug
#[utoipa::path(
    get,
    path = "/api/blogs/{slug}",
    params(
        ("slug" = String, Path, description = "Blog slug")
    ),
    responses(
        (status = 200, description = "Blog post found", body = ApiResponse<BlogResponseDto>),
        (status = 404, description = "Blog post not found")
    ),
    tag = "blogs"
)]
pub async fn get_blog_by_slug(
    State(service): State<Arc<BlogService>>,
    AppPath(slug): AppPath<String>,
) -> Result<Json<ApiResponse<BlogResponseDto>>> {
    let blog = service.get_by_slug(&slug).await?;
    Ok(Json(ApiResponse::success(Some(blog), None, None)))
}

/// Get a blog post by id
#[utoipa::path(
    get,
    path = "/api/blogs/id/{id}",
    params(
        ("id" = Uuid, Path, description = "Blog ID")
    ),
    responses(
        (status = 200, description = "Blog post found", body = ApiResponse<BlogResponseDto>),
        (status = 404, description = "Blog post not found")
    ),
    tag = "blogs"
)]
pub async fn get_blog(
    State(service): State<Arc<BlogService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<BlogResponseDto>>> {
    let blog = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(blog), None, None)))
}

/// Create a blog post
#[utoipa::path(
    post,
    path = "/api/blogs",
    request_body = CreateBlogDto,
    responses(
        (status = 201, description = "Blog post created", body = ApiResponse<BlogResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "blogs"
)]
pub async fn create_blog(
    State(service): State<Arc<BlogService>>,
    AppJson(dto): AppJson<CreateBlogDto>,
) -> Result<(StatusCode, Json<ApiResponse<BlogResponseDto>>)> {
    dto.validate()?;

    let blog = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(blog), None, None)),
    ))
}

/// Update a blog post
#[utoipa::path(
    put,
    path = "/api/blogs/{id}",
    params(
        ("id" = Uuid, Path, description = "Blog ID")
    ),
    request_body = UpdateBlogDto,
    responses(
        (status = 200, description = "Blog post updated", body = ApiResponse<BlogResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Blog post not found")
    ),
    tag = "blogs"
)]
pub async fn update_blog(
    State(service): State<Arc<BlogService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateBlogDto>,
) -> Result<Json<ApiResponse<BlogResponseDto>>> {
    dto.validate()?;

    let blog = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(blog), None, None)))
}

/// Delete a blog post
#[utoipa::path(
    delete,
    path = "/api/blogs/{id}",
    params(
        ("id" = Uuid, Path, description = "Blog ID")
    ),
    responses(
        (status = 200, description = "Blog post deleted"),
        (status = 404, description = "Blog post not found")
    ),
    tag = "blogs"
)]
pub async fn delete_blog(
    State(service): State<Arc<BlogService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Blog deleted".to_string()),
        None,
    )))
}

/// Check whether a post with the given title and/or slug exists
#[utoipa::path(
    post,
    path = "/api/blogs/verify",
    request_body = VerifyBlogDto,
    responses(
        (status = 200, description = "Lookup result", body = ApiResponse<BlogVerificationDto>),
        (status = 400, description = "Neither title nor slug given")
    ),
    tag = "blogs"
)]
pub async fn verify_blog(
    State(service): State<Arc<BlogService>>,
    AppJson(dto): AppJson<VerifyBlogDto>,
) -> Result<Json<ApiResponse<BlogVerificationDto>>> {
    let result = service.verify(dto).await?;
    Ok(Json(ApiResponse::success(Some(result), None, None)))
}
