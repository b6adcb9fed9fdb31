use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::categories::dtos::{
    CategoryTreeDto, CreateSubcategoryDto, NestedSubcategoriesQuery, SubcategoryResponseDto,
    UpdateSubcategoryDto,
};
use crate::features::categories::services::CategoryService;
use crate::shared::types::ApiResponse;

/// List all subcategories with their parent category
#[utoipa::path(
    get,
    path = "/api/subcategories",
    responses(
        (status = 200, description = "List of subcategories", body = ApiResponse<Vec<SubcategoryResponseDto>>),
    ),
    tag = "subcategories"
)]
pub async fn list_subcategories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<Vec<SubcategoryResponseDto>>>> {
    let subcategories = service.list_subcategories().await?;
    let len = subcategories.len();
    Ok(Json(ApiResponse::list(subcategories, len)))
}

/// Direct children of a parent category
#[utoipa::path(
    get,
    path = "/api/subcategories/nested",
    params(NestedSubcategoriesQuery),
    responses(
        (status = 200, description = "Children of the parent", body = ApiResponse<Vec<CategoryTreeDto>>),
        (status = 400, description = "parent_id missing")
    ),
    tag = "subcategories"
)]
pub async fn nested_subcategories(
    State(service): State<Arc<CategoryService>>,
    AppQuery(query): AppQuery<NestedSubcategoriesQuery>,
) -> Result<Json<ApiResponse<Vec<CategoryTreeDto>>>> {
    let parent_id = query
        .parent_id
        .ok_or_else(|| AppError::Validation("parent_id query param is required.".to_string()))?;

    let children = service.list_children(parent_id).await?;
    let len = children.len();
    Ok(Json(ApiResponse::list(children, len)))
}

/// Get a subcategory by id
#[utoipa::path(
    get,
    path = "/api/subcategories/{id}",
    params(
        ("id" = Uuid, Path, description = "Subcategory ID")
    ),
    responses(
        (status = 200, description = "Subcategory found", body = ApiResponse<SubcategoryResponseDto>),
        (status = 404, description = "Subcategory not found")
    ),
    tag = "subcategories"
)]
pub async fn get_subcategory(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<SubcategoryResponseDto>>> {
    let subcategory = service.get_subcategory(id).await?;
    Ok(Json(ApiResponse::success(Some(subcategory), None, None)))
}

/// Create a subcategory under an existing top-level category
#[utoipa::path(
    post,
    path = "/api/subcategories",
    request_body = CreateSubcategoryDto,
    responses(
        (status = 201, description = "Subcategory created", body = ApiResponse<SubcategoryResponseDto>),
        (status = 400, description = "Missing or invalid parent, or duplicate name")
    ),
    tag = "subcategories"
)]
pub async fn create_subcategory(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CreateSubcategoryDto>,
) -> Result<(StatusCode, Json<ApiResponse<SubcategoryResponseDto>>)> {
    dto.validate()?;

    let subcategory = service.create_subcategory(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(subcategory), None, None)),
    ))
}

/// Update a subcategory
#[utoipa::path(
    put,
    path = "/api/subcategories/{id}",
    params(
        ("id" = Uuid, Path, description = "Subcategory ID")
    ),
    request_body = UpdateSubcategoryDto,
    responses(
        (status = 200, description = "Subcategory updated", body = ApiResponse<SubcategoryResponseDto>),
        (status = 400, description = "Missing or invalid parent"),
        (status = 404, description = "Subcategory not found")
    ),
    tag = "subcategories"
)]
pub async fn update_subcategory(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateSubcategoryDto>,
) -> Result<Json<ApiResponse<SubcategoryResponseDto>>> {
    dto.validate()?;

    let subcategory = service.update_subcategory(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(subcategory), None, None)))
}

/// Delete a subcategory
#[utoipa::path(
    delete,
    path = "/api/subcategories/{id}",
    params(
        ("id" = Uuid, Path, description = "Subcategory ID")
    ),
    responses(
        (status = 200, description = "Subcategory deleted"),
        (status = 404, description = "Subcategory not found")
    ),
    tag = "subcategories"
)]
pub async fn delete_subcategory(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_subcategory(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Subcategory deleted".to_string()),
        None,
    )))
}
