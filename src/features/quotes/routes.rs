use std::sync::Arc;

use axum::{
    routing::{get, patch, put},
    Router,
};

use crate::features::quotes::handlers;
use crate::features::quotes::services::QuoteService;

/// Create routes for the quote inbox
pub fn routes(service: Arc<QuoteService>) -> Router {
    Router::new()
        .route(
            "/api/quotes",
            get(handlers::list_quotes).post(handlers::create_quote),
        )
        .route(
            "/api/quotes/{id}/status",
            put(handlers::update_quote_status),
        )
        .route("/api/quotes/{id}", patch(handlers::update_quote_status))
        .with_state(service)
}
