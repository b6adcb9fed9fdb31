mod core;
mod features;
mod shared;

use crate::core::config::Config;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::blogs::{routes as blogs_routes, BlogService, PgBlogRepository};
use crate::features::brands::{routes as brands_routes, BrandService, PgBrandRepository};
use crate::features::categories::{
    routes as categories_routes, CategoryRepository, CategoryService, PgCategoryRepository,
};
use crate::features::integrity::{routes as integrity_routes, IntegrityService};
use crate::features::products::{
    routes as products_routes, CategoryResolver, PgProductRepository, ProductRepository,
    ProductService,
};
use crate::features::offerings::{
    routes as offerings_routes, OfferingService, PgOfferingRepository,
};
use crate::features::quotes::{routes as quotes_routes, PgQuoteRepository, QuoteService};
use crate::features::suppliers::{
    routes as suppliers_routes, PgSupplierRepository, SupplierService,
};
use axum::extract::DefaultBodyLimit;
use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Services shared by the HTTP routes
struct AppServices {
    categories: Arc<CategoryService>,
    products: Arc<ProductService>,
    brands: Arc<BrandService>,
    quotes: Arc<QuoteService>,
    offerings: Arc<OfferingService>,
    suppliers: Arc<SupplierService>,
    blogs: Arc<BlogService>,
    integrity: Arc<IntegrityService>,
}

async fn health_check() -> axum::http::StatusCode {
    axum::http::StatusCode::OK
}

/// Catalog API routes plus `/health`, without docs or transport layers
fn api_router(services: AppServices) -> Router {
    Router::new()
        .merge(categories_routes::routes(services.categories))
        .merge(products_routes::routes(services.products))
        .merge(brands_routes::routes(services.brands))
        .merge(quotes_routes::routes(services.quotes))
        .merge(offerings_routes::routes(services.offerings))
        .merge(suppliers_routes::routes(services.suppliers))
        .merge(blogs_routes::routes(services.blogs))
        .merge(integrity_routes::routes(services.integrity))
        .route("/health", axum::routing::get(health_check))
}

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "System info: tokio_worker_threads={}, pid={}",
        worker_threads,
        std::process::id()
    );
    tracing::info!(
        "Configuration loaded successfully (category resolution: {})",
        config.catalog.resolution_mode
    );

    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    database::run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    // Category and product storage are shared by the resolver and the integrity scan
    let category_repository: Arc<dyn CategoryRepository> =
        Arc::new(PgCategoryRepository::new(pool.clone()));
    let product_repository: Arc<dyn ProductRepository> =
        Arc::new(PgProductRepository::new(pool.clone()));

    let resolver = CategoryResolver::new(
        Arc::clone(&category_repository),
        config.catalog.resolution_mode,
    );

    let services = AppServices {
        categories: Arc::new(CategoryService::new(Arc::clone(&category_repository))),
        products: Arc::new(ProductService::new(
            Arc::clone(&product_repository),
            resolver,
        )),
        brands: Arc::new(BrandService::new(Arc::new(PgBrandRepository::new(
            pool.clone(),
        )))),
        quotes: Arc::new(QuoteService::new(Arc::new(PgQuoteRepository::new(
            pool.clone(),
        )))),
        offerings: Arc::new(OfferingService::new(Arc::new(
            PgOfferingRepository::new(pool.clone()),
        ))),
        suppliers: Arc::new(SupplierService::new(Arc::new(
            PgSupplierRepository::new(pool.clone()),
        ))),
        blogs: Arc::new(BlogService::new(Arc::new(PgBlogRepository::new(
            pool.clone(),
        )))),
        integrity: Arc::new(IntegrityService::new(
            category_repository,
            product_repository,
        )),
    };
    tracing::info!("Catalog services initialized");

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    let app = Router::new()
        .merge(swagger)
        .merge(api_router(services))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.app.max_request_body_size))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        .layer(
            ServiceBuilder::new()
                // Generate X-Request-Id using UUID v7 (or use client-provided one)
                .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(middleware::MakeSpanWithRequestId)
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(PropagateRequestIdLayer::x_request_id()),
        );

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ResolutionMode;
    use crate::features::blogs::repositories::InMemoryBlogRepository;
    use crate::features::brands::repositories::InMemoryBrandRepository;
    use crate::features::categories::dtos::CategoryResponseDto;
    use crate::features::categories::repositories::InMemoryCategoryRepository;
    use crate::features::integrity::dtos::{IntegrityIssue, IntegrityReportDto};
    use crate::features::products::dtos::ProductResponseDto;
    use crate::features::offerings::repositories::InMemoryOfferingRepository;
    use crate::features::products::repositories::InMemoryProductRepository;
    use crate::features::quotes::repositories::InMemoryQuoteRepository;
    use crate::features::suppliers::repositories::InMemorySupplierRepository;
    use crate::shared::types::ApiResponse;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    fn server() -> TestServer {
        let categories: Arc<dyn CategoryRepository> = Arc::new(InMemoryCategoryRepository::new());
        let products: Arc<dyn ProductRepository> = Arc::new(InMemoryProductRepository::new());

        let services = AppServices {
            categories: Arc::new(CategoryService::new(Arc::clone(&categories))),
            products: Arc::new(ProductService::new(
                Arc::clone(&products),
                CategoryResolver::new(Arc::clone(&categories), ResolutionMode::Strict),
            )),
            brands: Arc::new(BrandService::new(Arc::new(InMemoryBrandRepository::new()))),
            quotes: Arc::new(QuoteService::new(Arc::new(InMemoryQuoteRepository::new()))),
            offerings: Arc::new(OfferingService::new(Arc::new(
                InMemoryOfferingRepository::new(),
            ))),
            suppliers: Arc::new(SupplierService::new(Arc::new(
                InMemorySupplierRepository::new(),
            ))),
            blogs: Arc::new(BlogService::new(Arc::new(InMemoryBlogRepository::new()))),
            integrity: Arc::new(IntegrityService::new(categories, products)),
        };
        TestServer::new(api_router(services)).unwrap()
    }

    async fn create_category(server: &TestServer, body: serde_json::Value) -> CategoryResponseDto {
        server
            .post("/api/categories")
            .json(&body)
            .await
            .json::<ApiResponse<CategoryResponseDto>>()
            .data
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        server().get("/health").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_content_routes_are_mounted() {
        let server = server();
        for path in [
            "/api/brands",
            "/api/quotes",
            "/api/services",
            "/api/suppliers",
            "/api/blogs",
        ] {
            server.get(path).await.assert_status_ok();
        }
    }

    #[tokio::test]
    async fn test_catalog_flow_across_features() {
        let server = server();
        let spices = create_category(&server, json!({ "name": "Spices" })).await;
        let chili = create_category(
            &server,
            json!({ "name": "Chili Powder", "parent_id": spices.id }),
        )
        .await;

        let response = server
            .post("/api/products")
            .json(&json!({
                "title": "Kashmiri Chili",
                "description": "Mild heat",
                "category": chili.id
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let product = response
            .json::<ApiResponse<ProductResponseDto>>()
            .data
            .unwrap();
        assert_eq!(product.category_id, Some(spices.id));
        assert_eq!(product.sub_category_id, Some(chili.id));

        // Deleting the parent leaves the subcategory and the product in place
        server
            .delete(&format!("/api/categories/{}", spices.id))
            .await
            .assert_status_ok();
        server
            .get(&format!("/api/products/{}", product.id))
            .await
            .assert_status_ok();

        let report = server
            .get("/api/catalog/integrity")
            .await
            .json::<ApiResponse<IntegrityReportDto>>()
            .data
            .unwrap();
        assert!(report
            .issues
            .contains(&IntegrityIssue::OrphanedSubcategory {
                category_id: chili.id,
                parent_id: spices.id,
            }));
        assert!(report.issues.contains(&IntegrityIssue::MissingCategory {
            product_id: product.id,
            category_id: Some(spices.id),
        }));
    }
}
