use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::products::handlers;
use crate::features::products::services::ProductService;

/// Create routes for products
pub fn routes(service: Arc<ProductService>) -> Router {
    Router::new()
        .route(
            "/api/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route("/api/products/query", get(handlers::query_products))
        .route(
            "/api/products/category/{category_id}",
            get(handlers::products_by_category),
        )
        .route(
            "/api/products/subcategory/{sub_category_id}",
            get(handlers::products_by_subcategory),
        )
        .route(
            "/api/products/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .with_state(service)
}
