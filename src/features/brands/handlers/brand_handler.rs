use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::brands::dtos::{BrandResponseDto, CreateBrandDto, UpdateBrandDto};
use crate::features::brands::services::BrandService;
use crate::shared::types::ApiResponse;

/// List all brands
#[utoipa::path(
    get,
    path = "/api/brands",
    responses(
        (status = 200, description = "List of brands", body = ApiResponse<Vec<BrandResponseDto>>),
    ),
    tag = "brands"
)]
pub async fn list_brands(
    State(service): State<Arc<BrandService>>,
) -> Result<Json<ApiResponse<Vec<BrandResponseDto>>>> {
    let brands = service.list().await?;
    let len = brands.len();
    Ok(Json(ApiResponse::list(brands, len)))
}

/// Get brand by id
#[utoipa::path(
    get,
    path = "/api/brands/{id}",
    params(
        ("id" = Uuid, Path, description = "Brand ID")
    ),
    responses(
        (status = 200, description = "Brand found", body = ApiResponse<BrandResponseDto>),
        (status = 404, description = "Brand not found")
    ),
    tag = "brands"
)]
pub async fn get_brand(
    State(service): State<Arc<BrandService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<BrandResponseDto>>> {
    let brand = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(brand), None, None)))
}

/// Create a brand
#[utoipa::path(
    post,
    path = "/api/brands",
    request_body = CreateBrandDto,
    responses(
        (status = 201, description = "Brand created", body = ApiResponse<BrandResponseDto>),
        (status = 400, description = "Validation error or duplicate name")
    ),
    tag = "brands"
)]
pub async fn create_brand(
    State(service): State<Arc<BrandService>>,
    AppJson(dto): AppJson<CreateBrandDto>,
) -> Result<(StatusCode, Json<ApiResponse<BrandResponseDto>>)> {
    dto.validate()?;

    let brand = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(brand), None, None)),
    ))
}

/// Update a brand
#[utoipa::path(
    put,
    path = "/api/brands/{id}",
    params(
        ("id" = Uuid, Path, description = "Brand ID")
    ),
    request_body = UpdateBrandDto,
    responses(
        (status = 200, description = "Brand updated", body = ApiResponse<BrandResponseDto>),
        (status = 400, description = "Validation error or duplicate name"),
        (status = 404, description = "Brand not found")
    ),
    tag = "brands"
)]
pub async fn update_brand(
    State(service): State<Arc<BrandService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateBrandDto>,
) -> Result<Json<ApiResponse<BrandResponseDto>>> {
    dto.validate()?;

    let brand = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(brand), None, None)))
}

/// Delete a brand
#[utoipa::path(
    delete,
    path = "/api/brands/{id}",
    params(
        ("id" = Uuid, Path, description = "Brand ID")
    ),
    responses(
        (status = 200, description = "Brand deleted"),
        (status = 404, description = "Brand not found")
    ),
    tag = "brands"
)]
pub async fn delete_brand(
    State(service): State<Arc<BrandService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Brand deleted".to_string()),
        None,
    )))
}
