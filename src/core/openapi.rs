use utoipa::{Modify, OpenApi};

use crate::features::blogs::{
    dtos as blogs_dtos, handlers as blogs_handlers, models as blogs_models,
};
use crate::features::brands::{dtos as brands_dtos, handlers as brands_handlers};
use crate::features::categories::{
    dtos as categories_dtos, handlers as categories_handlers, models as categories_models,
};
use crate::features::integrity::{dtos as integrity_dtos, handlers as integrity_handlers};
use crate::features::offerings::{dtos as offerings_dtos, handlers as offerings_handlers};
use crate::features::products::{dtos as products_dtos, handlers as products_handlers};
use crate::features::quotes::{
    dtos as quotes_dtos, handlers as quotes_handlers, models as quotes_models,
};
use crate::features::suppliers::{dtos as suppliers_dtos, handlers as suppliers_handlers};
use crate::shared::types::{ApiResponse, ErrorResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        categories_handlers::nested_categories,
        categories_handlers::get_category,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Subcategories
        categories_handlers::list_subcategories,
        categories_handlers::nested_subcategories,
        categories_handlers::get_subcategory,
        categories_handlers::create_subcategory,
        categories_handlers::update_subcategory,
        categories_handlers::delete_subcategory,
        // Products
        products_handlers::list_products,
        products_handlers::get_product,
        products_handlers::create_product,
        products_handlers::update_product,
        products_handlers::delete_product,
        products_handlers::products_by_category,
        products_handlers::products_by_subcategory,
        products_handlers::query_products,
        // Brands
        brands_handlers::list_brands,
        brands_handlers::get_brand,
        brands_handlers::create_brand,
        brands_handlers::update_brand,
        brands_handlers::delete_brand,
        // Quotes
        quotes_handlers::list_quotes,
        quotes_handlers::create_quote,
        quotes_handlers::update_quote_status,
        // Services
        offerings_handlers::list_services,
        offerings_handlers::get_service,
        offerings_handlers::create_service,
        offerings_handlers::update_service,
        offerings_handlers::delete_service,
        // Suppliers
        suppliers_handlers::list_suppliers,
        suppliers_handlers::get_supplier,
        suppliers_handlers::create_supplier,
        // Blogs
        blogs_handlers::list_blogs,
        blogs_handlers::get_blog_by_slug,
        blogs_handlers::get_blog,
        blogs_handlers::create_blog,
        blogs_handlers::update_blog,
        blogs_handlers::delete_blog,
        blogs_handlers::verify_blog,
        // Integrity
        integrity_handlers::integrity_report,
    ),
    components(
        schemas(
            Meta,
            ErrorResponse,
            // Categories
            categories_models::CategoryKind,
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            categories_dtos::CreateSubcategoryDto,
            categories_dtos::UpdateSubcategoryDto,
            categories_dtos::CategoryResponseDto,
            categories_dtos::SubcategoryResponseDto,
            categories_dtos::CategoryTreeDto,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<Vec<categories_dtos::CategoryTreeDto>>,
            ApiResponse<categories_dtos::SubcategoryResponseDto>,
            ApiResponse<Vec<categories_dtos::SubcategoryResponseDto>>,
            // Products
            products_dtos::CreateProductDto,
            products_dtos::UpdateProductDto,
            products_dtos::ProductResponseDto,
            ApiResponse<products_dtos::ProductResponseDto>,
            ApiResponse<Vec<products_dtos::ProductResponseDto>>,
            // Brands
            brands_dtos::CreateBrandDto,
            brands_dtos::UpdateBrandDto,
            brands_dtos::BrandResponseDto,
            ApiResponse<brands_dtos::BrandResponseDto>,
            ApiResponse<Vec<brands_dtos::BrandResponseDto>>,
            // Quotes
            quotes_models::QuoteStatus,
            quotes_dtos::CreateQuoteDto,
            quotes_dtos::UpdateQuoteStatusDto,
            quotes_dtos::QuoteResponseDto,
            ApiResponse<quotes_dtos::QuoteResponseDto>,
            ApiResponse<Vec<quotes_dtos::QuoteResponseDto>>,
            // Services
            offerings_dtos::CreateOfferingDto,
            offerings_dtos::UpdateOfferingDto,
            offerings_dtos::OfferingResponseDto,
            ApiResponse<offerings_dtos::OfferingResponseDto>,
            ApiResponse<Vec<offerings_dtos::OfferingResponseDto>>,
            // Suppliers
            suppliers_dtos::SupplierAddressDto,
            suppliers_dtos::CreateSupplierDto,
            suppliers_dtos::SupplierResponseDto,
            ApiResponse<suppliers_dtos::SupplierResponseDto>,
            ApiResponse<Vec<suppliers_dtos::SupplierResponseDto>>,
            // Blogs
            blogs_models::BlogStatus,
            blogs_dtos::CreateBlogDto,
            blogs_dtos::UpdateBlogDto,
            blogs_dtos::VerifyBlogDto,
            blogs_dtos::BlogResponseDto,
            blogs_dtos::BlogSummaryDto,
            blogs_dtos::BlogVerificationDto,
            ApiResponse<blogs_dtos::BlogResponseDto>,
            ApiResponse<Vec<blogs_dtos::BlogResponseDto>>,
            ApiResponse<blogs_dtos::BlogVerificationDto>,
            // Integrity
            integrity_dtos::IntegrityIssue,
            integrity_dtos::IntegrityReportDto,
            ApiResponse<integrity_dtos::IntegrityReportDto>,
        )
    ),
    tags(
        (name = "categories", description = "Category hierarchy (top-level categories and subcategories)"),
        (name = "products", description = "Products and their category assignment"),
        (name = "brands", description = "Brands referenced by products"),
        (name = "quotes", description = "Customer quote requests"),
        (name = "services", description = "Services offered to trade customers"),
        (name = "suppliers", description = "Supplier applications"),
        (name = "blogs", description = "Blog posts"),
        (name = "catalog", description = "Catalog maintenance"),
    ),
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Catalog administration API",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_lists_catalog_paths() {
        let openapi = ApiDoc::openapi();
        for path in [
            "/api/categories",
            "/api/subcategories/nested",
            "/api/products/query",
            "/api/products/category/{category_id}",
            "/api/quotes/{id}/status",
            "/api/catalog/integrity",
            "/api/services/{id}",
            "/api/suppliers",
            "/api/blogs/{slug}",
            "/api/blogs/verify",
        ] {
            assert!(openapi.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_info_modifier_overrides_title() {
        let mut openapi = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Spice Catalog".to_string(),
            version: "2.0.0".to_string(),
            description: "Internal".to_string(),
        }
        .modify(&mut openapi);

        assert_eq!(openapi.info.title, "Spice Catalog");
        assert_eq!(openapi.info.version, "2.0.0");
    }
}
