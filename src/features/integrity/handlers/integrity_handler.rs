use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::integrity::dtos::IntegrityReportDto;
use crate::features::integrity::services::IntegrityService;
use crate::shared::types::ApiResponse;

/// Scan categories and products for dangling references
#[utoipa::path(
    get,
    path = "/api/catalog/integrity",
    responses(
        (status = 200, description = "Integrity report", body = ApiResponse<IntegrityReportDto>),
    ),
    tag = "catalog"
)]
pub async fn integrity_report(
    State(service): State<Arc<IntegrityService>>,
) -> Result<Json<ApiResponse<IntegrityReportDto>>> {
    let report = service.report().await?;
    Ok(Json(ApiResponse::success(Some(report), None, None)))
}
