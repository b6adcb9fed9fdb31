use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::offerings::dtos::{
    CreateOfferingDto, OfferingResponseDto, UpdateOfferingDto,
};
use crate::features::offerings::services::OfferingService;
use crate::shared::types::ApiResponse;

/// List all services, newest first
#[utoipa::path(
    get,
    path = "/api/services",
    responses(
        (status = 200, description = "List of services", body = ApiResponse<Vec<OfferingResponseDto>>),
    ),
    tag = "services"
)]
pub async fn list_services(
    State(service): State<Arc<OfferingService>>,
) -> Result<Json<ApiResponse<Vec<OfferingResponseDto>>>> {
    let offerings = service.list().await?;
    let len = offerings.len();
    Ok(Json(ApiResponse::list(offerings, len)))
}

/// Get a service by id
#[utoipa::path(
    get,
    path = "/api/services/{id}",
    params(
        ("id" = Uuid, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "Service found", body = ApiResponse<OfferingResponseDto>),
        (status = 404, description = "Service not found")
    ),
    tag = "services"
)]
pub async fn get_service(
    State(service): State<Arc<OfferingService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<OfferingResponseDto>>> {
    let offering = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(offering), None, None)))
}

/// Create a service
#[utoipa::path(
    post,
    path = "/api/services",
    request_body = CreateOfferingDto,
    responses(
        (status = 201, description = "Service created", body = ApiResponse<OfferingResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "services"
)]
pub async fn create_service(
    State(service): State<Arc<OfferingService>>,
    AppJson(dto): AppJson<CreateOfferingDto>,
) -> Result<(StatusCode, Json<ApiResponse<OfferingResponseDto>>)> {
    dto.validate()?;

    let offering = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(offering), None, None)),
    ))
}

/// Update a service
#[utoipa::path(
    put,
    path = "/api/services/{id}",
    params(
        ("id" = Uuid, Path, description = "Service ID")
    ),
    request_body = UpdateOfferingDto,
    responses(
        (status = 200, description = "Service updated", body = ApiResponse<OfferingResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Service not found")
    ),
    tag = "services"
)]
pub async fn update_service(
    State(service): State<Arc<OfferingService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateOfferingDto>,
) -> Result<Json<ApiResponse<OfferingResponseDto>>> {
    dto.validate()?;

    let offering = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(offering), None, None)))
}

/// Delete a service
#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    params(
        ("id" = Uuid, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "Service deleted"),
        (status = 404, description = "Service not found")
    ),
    tag = "services"
)]
pub async fn delete_service(
    State(service): State<Arc<OfferingService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Service deleted".to_string()),
        None,
    )))
}
