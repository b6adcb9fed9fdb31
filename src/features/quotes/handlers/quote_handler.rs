use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::quotes::dtos::{CreateQuoteDto, QuoteResponseDto, UpdateQuoteStatusDto};
use crate::features::quotes::services::QuoteService;
use crate::shared::types::ApiResponse;

/// List quote requests, newest first
#[utoipa::path(
    get,
    path = "/api/quotes",
    responses(
        (status = 200, description = "List of quotes", body = ApiResponse<Vec<QuoteResponseDto>>),
    ),
    tag = "quotes"
)]
pub async fn list_quotes(
    State(service): State<Arc<QuoteService>>,
) -> Result<Json<ApiResponse<Vec<QuoteResponseDto>>>> {
    let quotes = service.list().await?;
    let len = quotes.len();
    Ok(Json(ApiResponse::list(quotes, len)))
}

/// Submit a quote request
///
/// Public endpoint used by the storefront form.
#[utoipa::path(
    post,
    path = "/api/quotes",
    request_body = CreateQuoteDto,
    responses(
        (status = 201, description = "Quote submitted", body = ApiResponse<QuoteResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "quotes"
)]
pub async fn create_quote(
    State(service): State<Arc<QuoteService>>,
    AppJson(dto): AppJson<CreateQuoteDto>,
) -> Result<(StatusCode, Json<ApiResponse<QuoteResponseDto>>)> {
    dto.validate()?;

    let quote = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(quote),
            Some("Quote request received".to_string()),
            None,
        )),
    ))
}

/// Change the status of a quote
#[utoipa::path(
    put,
    path = "/api/quotes/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Quote ID")
    ),
    request_body = UpdateQuoteStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<QuoteResponseDto>),
        (status = 400, description = "Invalid status value"),
        (status = 404, description = "Quote not found")
    ),
    tag = "quotes"
)]
pub async fn update_quote_status(
    State(service): State<Arc<QuoteService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateQuoteStatusDto>,
) -> Result<Json<ApiResponse<QuoteResponseDto>>> {
    let quote = service.update_status(id, dto.status).await?;
    Ok(Json(ApiResponse::success(Some(quote), None, None)))
}
