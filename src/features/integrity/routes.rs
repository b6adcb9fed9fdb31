use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::integrity::handlers;
use crate::features::integrity::services::IntegrityService;

/// Create routes for the integrity report
pub fn routes(service: Arc<IntegrityService>) -> Router {
    Router::new()
        .route("/api/catalog/integrity", get(handlers::integrity_report))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::repositories::InMemoryCategoryRepository;
    use crate::features::integrity::dtos::IntegrityReportDto;
    use crate::features::products::repositories::InMemoryProductRepository;
    use crate::shared::types::ApiResponse;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_empty_catalog_report() {
        let service = Arc::new(IntegrityService::new(
            Arc::new(InMemoryCategoryRepository::new()),
            Arc::new(InMemoryProductRepository::new()),
        ));
        let server = TestServer::new(routes(service)).unwrap();

        let response = server.get("/api/catalog/integrity").await;
        response.assert_status_ok();
        let report = response
            .json::<ApiResponse<IntegrityReportDto>>()
            .data
            .unwrap();
        assert_eq!(report.products_checked, 0);
        assert!(report.issues.is_empty());
    }
}
