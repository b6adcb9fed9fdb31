use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::suppliers::handlers;
use crate::features::suppliers::services::SupplierService;

/// Create routes for supplier applications
pub fn routes(service: Arc<SupplierService>) -> Router {
    Router::new()
        .route(
            "/api/suppliers",
            get(handlers::list_suppliers).post(handlers::create_supplier),
        )
        .route("/api/suppliers/{id}", get(handlers::get_supplier))
        .with_state(service)
}
