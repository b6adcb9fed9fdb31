use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories and subcategories
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route(
            "/api/categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route("/api/categories/nested", get(handlers::nested_categories))
        .route(
            "/api/categories/{id}",
            get(handlers::get_category)
                .put(handlers::update_category)
                .delete(handlers::delete_category),
        )
        .route(
            "/api/subcategories",
            get(handlers::list_subcategories).post(handlers::create_subcategory),
        )
        .route(
            "/api/subcategories/nested",
            get(handlers::nested_subcategories),
        )
        .route(
            "/api/subcategories/{id}",
            get(handlers::get_subcategory)
                .put(handlers::update_subcategory)
                .delete(handlers::delete_subcategory),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::dtos::{
        CategoryResponseDto, CategoryTreeDto, SubcategoryResponseDto,
    };
    use crate::features::categories::models::CategoryKind;
    use crate::features::categories::repositories::InMemoryCategoryRepository;
    use crate::shared::types::{ApiResponse, ErrorResponse};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;
    use uuid::Uuid;

    fn server() -> TestServer {
        let service = Arc::new(CategoryService::new(Arc::new(
            InMemoryCategoryRepository::new(),
        )));
        TestServer::new(routes(service)).unwrap()
    }

    async fn create(server: &TestServer, body: serde_json::Value) -> CategoryResponseDto {
        let response = server.post("/api/categories").json(&body).await;
        response.assert_status(StatusCode::CREATED);
        response
            .json::<ApiResponse<CategoryResponseDto>>()
            .data
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_fetch_category() {
        let server = server();
        let created = create(
            &server,
            json!({ "name": "Spices", "description": "All spices", "image": "https://cdn.example.com/s.png" }),
        )
        .await;
        assert_eq!(created.kind, CategoryKind::TopLevel);

        let response = server.get(&format!("/api/categories/{}", created.id)).await;
        response.assert_status_ok();
        let fetched = response
            .json::<ApiResponse<CategoryResponseDto>>()
            .data
            .unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_unknown_category_is_404() {
        let server = server();
        let response = server
            .get(&format!("/api/categories/{}", Uuid::new_v4()))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body = response.json::<ErrorResponse>();
        assert!(!body.success);
        assert!(body.error.contains("not found"));
    }

    #[tokio::test]
    async fn test_malformed_id_is_400() {
        let server = server();
        let response = server.get("/api/categories/not-a-uuid").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_name_is_400() {
        let server = server();
        let response = server
            .post("/api/categories")
            .json(&json!({ "description": "no name" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let response = server
            .post("/api/categories")
            .json(&json!({ "name": "" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_whitespace_name_is_400() {
        let server = server();
        let response = server
            .post("/api/categories")
            .json(&json!({ "name": "   " }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.json::<ErrorResponse>().errors.is_some());

        let spices = create(&server, json!({ "name": "Spices" })).await;
        server
            .put(&format!("/api/categories/{}", spices.id))
            .json(&json!({ "name": "  " }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
        server
            .post("/api/subcategories")
            .json(&json!({ "name": " ", "parent": spices.id }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        let response = server.get("/api/categories").await;
        let all = response
            .json::<ApiResponse<Vec<CategoryResponseDto>>>()
            .data
            .unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Spices");
    }

    #[tokio::test]
    async fn test_duplicate_name_is_400() {
        let server = server();
        create(&server, json!({ "name": "Spices" })).await;

        let response = server
            .post("/api/categories")
            .json(&json!({ "name": "Spices" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_nested_tree() {
        let server = server();
        let spices = create(&server, json!({ "name": "Spices" })).await;
        create(&server, json!({ "name": "Chili Powder", "parent": spices.id })).await;

        for path in ["/api/categories/nested", "/api/categories?tree=true"] {
            let response = server.get(path).await;
            response.assert_status_ok();
            let tree = response
                .json::<ApiResponse<Vec<CategoryTreeDto>>>()
                .data
                .unwrap();
            assert_eq!(tree.len(), 1);
            assert_eq!(tree[0].id, spices.id);
            assert_eq!(tree[0].children.len(), 1);
            assert_eq!(tree[0].children[0].name, "Chili Powder");
        }
    }

    #[tokio::test]
    async fn test_subcategory_crud() {
        let server = server();
        let spices = create(&server, json!({ "name": "Spices" })).await;

        let response = server
            .post("/api/subcategories")
            .json(&json!({ "name": "Chili Powder" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let response = server
            .post("/api/subcategories")
            .json(&json!({ "name": "Chili Powder", "parent": spices.id }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let chili = response
            .json::<ApiResponse<SubcategoryResponseDto>>()
            .data
            .unwrap();
        assert_eq!(chili.parent_id, spices.id);

        let response = server
            .get("/api/subcategories/nested")
            .add_query_param("parentId", spices.id)
            .await;
        response.assert_status_ok();
        let children = response
            .json::<ApiResponse<Vec<CategoryTreeDto>>>()
            .data
            .unwrap();
        assert_eq!(children.len(), 1);

        let response = server
            .put(&format!("/api/subcategories/{}", chili.id))
            .json(&json!({ "name": "Hot Chili Powder" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let response = server
            .put(&format!("/api/subcategories/{}", chili.id))
            .json(&json!({ "name": "Hot Chili Powder", "parent_id": spices.id }))
            .await;
        response.assert_status_ok();

        let response = server.get("/api/subcategories").await;
        let subs = response
            .json::<ApiResponse<Vec<SubcategoryResponseDto>>>()
            .data
            .unwrap();
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].name, "Hot Chili Powder");

        server
            .delete(&format!("/api/subcategories/{}", chili.id))
            .await
            .assert_status_ok();
        server
            .get(&format!("/api/subcategories/{}", chili.id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_nested_subcategories_requires_parent_id() {
        let server = server();
        let response = server.get("/api/subcategories/nested").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
