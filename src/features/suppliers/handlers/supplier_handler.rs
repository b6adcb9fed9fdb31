use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::suppliers::dtos::{CreateSupplierDto, SupplierResponseDto};
use crate::features::suppliers::services::SupplierService;
use crate::shared::types::ApiResponse;

/// List supplier applications, newest first
#[utoipa::path(
    get,
    path = "/api/suppliers",
    responses(
        (status = 200, description = "List of supplier applications", body = ApiResponse<Vec<SupplierResponseDto>>),
    ),
    tag = "suppliers"
)]
pub async fn list_suppliers(
    State(service): State<Arc<SupplierService>>,
) -> Result<Json<ApiResponse<Vec<SupplierResponseDto>>>> {
    let suppliers = service.list().await?;
    let len = suppliers.len();
    Ok(Json(ApiResponse::list(suppliers, len)))
}

/// Get a supplier application by id
#[utoipa::path(
    get,
    path = "/api/suppliers/{id}",
    params(
        ("id" = Uuid, Path, description = "Supplier application ID")
    ),
    responses(
        (status = 200, description = "Application found", body = ApiResponse<SupplierResponseDto>),
        (status = 404, description = "Application not found")
    ),
    tag = "suppliers"
)]
pub async fn get_supplier(
    State(service): State<Arc<SupplierService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<SupplierResponseDto>>> {
    let supplier = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(supplier), None, None)))
}

/// Submit a supplier application
///
/// Public endpoint used by the storefront form. Upload the brochure first and send its URL.
#[utoipa::path(
    post,
    path = "/api/suppliers",
    request_body = CreateSupplierDto,
    responses(
        (status = 201, description = "Application received", body = ApiResponse<SupplierResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "suppliers"
)]
pub async fn create_supplier(
    State(service): State<Arc<SupplierService>>,
    AppJson(dto): AppJson<CreateSupplierDto>,
) -> Result<(StatusCode, Json<ApiResponse<SupplierResponseDto>>)> {
    dto.validate()?;

    let supplier = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(supplier),
            Some("Supplier application received".to_string()),
            None,
        )),
    ))
}
