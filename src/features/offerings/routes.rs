use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::offerings::handlers;
use crate::features::offerings::services::OfferingService;

/// Create routes for offered services
pub fn routes(service: Arc<OfferingService>) -> Router {
    Router::new()
        .route(
            "/api/services",
            get(handlers::list_services).post(handlers::create_service),
        )
        .route(
            "/api/services/{id}",
            get(handlers::get_service)
                .put(handlers::update_service)
                .delete(handlers::delete_service),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::offerings::dtos::OfferingResponseDto;
    use crate::features::offerings::repositories::InMemoryOfferingRepository;
    use crate::shared::types::{ApiResponse, ErrorResponse};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;
    use uuid::Uuid;

    fn server() -> TestServer {
        let service = Arc::new(OfferingService::new(Arc::new(
            InMemoryOfferingRepository::new(),
        )));
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_service_crud() {
        let server = server();
        let response = server
            .post("/api/services")
            .json(&json!({
                "title": "Private labelling",
                "description": "Your brand on our blends",
                "featuredImage": ""
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created = response
            .json::<ApiResponse<OfferingResponseDto>>()
            .data
            .unwrap();
        assert_eq!(created.featured_image, None);

        let response = server
            .put(&format!("/api/services/{}", created.id))
            .json(&json!({ "description": "Blends packed under your label" }))
            .await;
        response.assert_status_ok();

        let fetched = server
            .get(&format!("/api/services/{}", created.id))
            .await
            .json::<ApiResponse<OfferingResponseDto>>()
            .data
            .unwrap();
        assert_eq!(fetched.title, "Private labelling");
        assert_eq!(fetched.description, "Blends packed under your label");

        server
            .delete(&format!("/api/services/{}", created.id))
            .await
            .assert_status_ok();
        let response = server.get(&format!("/api/services/{}", created.id)).await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<ErrorResponse>().error, "Service not found");
    }

    #[tokio::test]
    async fn test_blank_fields_are_400() {
        let server = server();
        for body in [
            json!({ "title": " ", "description": "Bulk grinding" }),
            json!({ "title": "Grinding", "description": "" }),
            json!({ "description": "No title" }),
        ] {
            server
                .post("/api/services")
                .json(&body)
                .await
                .assert_status(StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_update_missing_service_is_404() {
        server()
            .put(&format!("/api/services/{}", Uuid::new_v4()))
            .json(&json!({ "title": "Gone" }))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
