use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::products::dtos::{
    CreateProductDto, ProductQueryParams, ProductResponseDto, UpdateProductDto,
};
use crate::features::products::services::ProductService;
use crate::shared::types::ApiResponse;

fn list_response(products: Vec<ProductResponseDto>) -> Json<ApiResponse<Vec<ProductResponseDto>>> {
    let len = products.len();
    Json(ApiResponse::list(products, len))
}

/// List all products, newest first
#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "List of products", body = ApiResponse<Vec<ProductResponseDto>>),
    ),
    tag = "products"
)]
pub async fn list_products(
    State(service): State<Arc<ProductService>>,
) -> Result<Json<ApiResponse<Vec<ProductResponseDto>>>> {
    Ok(list_response(service.list().await?))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<ProductResponseDto>),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn get_product(
    State(service): State<Arc<ProductService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    let product = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// Create a product
///
/// The submitted category pair is normalized: a subcategory id in `category_id` is stored as
/// `(parent, subcategory)`.
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Validation error or unresolvable category")
    ),
    tag = "products"
)]
pub async fn create_product(
    State(service): State<Arc<ProductService>>,
    AppJson(dto): AppJson<CreateProductDto>,
) -> Result<(StatusCode, Json<ApiResponse<ProductResponseDto>>)> {
    dto.validate()?;

    let product = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(product), None, None)),
    ))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Validation error or unresolvable category"),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn update_product(
    State(service): State<Arc<ProductService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateProductDto>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    dto.validate()?;

    let product = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn delete_product(
    State(service): State<Arc<ProductService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Product deleted".to_string()),
        None,
    )))
}

/// Products whose stored category equals `category_id`
#[utoipa::path(
    get,
    path = "/api/products/category/{category_id}",
    params(
        ("category_id" = Uuid, Path, description = "Top-level category ID")
    ),
    responses(
        (status = 200, description = "Matching products", body = ApiResponse<Vec<ProductResponseDto>>),
    ),
    tag = "products"
)]
pub async fn products_by_category(
    State(service): State<Arc<ProductService>>,
    AppPath(category_id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<Vec<ProductResponseDto>>>> {
    Ok(list_response(service.by_category(category_id).await?))
}

/// Products whose stored subcategory equals `sub_category_id`
#[utoipa::path(
    get,
    path = "/api/products/subcategory/{sub_category_id}",
    params(
        ("sub_category_id" = Uuid, Path, description = "Subcategory ID")
    ),
    responses(
        (status = 200, description = "Matching products", body = ApiResponse<Vec<ProductResponseDto>>),
    ),
    tag = "products"
)]
pub async fn products_by_subcategory(
    State(service): State<Arc<ProductService>>,
    AppPath(sub_category_id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<Vec<ProductResponseDto>>>> {
    Ok(list_response(service.by_subcategory(sub_category_id).await?))
}

/// Filter products by category and/or subcategory
#[utoipa::path(
    get,
    path = "/api/products/query",
    params(ProductQueryParams),
    responses(
        (status = 200, description = "Matching products", body = ApiResponse<Vec<ProductResponseDto>>),
        (status = 400, description = "Malformed id")
    ),
    tag = "products"
)]
pub async fn query_products(
    State(service): State<Arc<ProductService>>,
    AppQuery(params): AppQuery<ProductQueryParams>,
) -> Result<Json<ApiResponse<Vec<ProductResponseDto>>>> {
    Ok(list_response(service.query(&params).await?))
}
