use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::products::dtos::{
    CreateProductDto, ProductQueryParams, ProductResponseDto, UpdateProductDto,
};
use crate::features::products::models::{NewProduct, ProductChanges, ProductFilter};
use crate::features::products::repositories::ProductRepository;
use crate::features::products::resolver::CategoryResolver;
use crate::shared::text::{normalize_patch, normalize_text};

fn normalize_gallery(gallery: Vec<String>) -> Vec<String> {
    gallery
        .into_iter()
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .collect()
}

/// Service for product operations
///
/// Every write that carries a category reference goes through the resolver first.
pub struct ProductService {
    products: Arc<dyn ProductRepository>,
    resolver: CategoryResolver,
}

impl ProductService {
    pub fn new(products: Arc<dyn ProductRepository>, resolver: CategoryResolver) -> Self {
        Self { products, resolver }
    }

    pub async fn list(&self) -> Result<Vec<ProductResponseDto>> {
        let products = self.products.list().await?;
        Ok(products.into_iter().map(|p| p.into()).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<ProductResponseDto> {
        self.products
            .get_by_id(id)
            .await?
            .map(|p| p.into())
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))
    }

    pub async fn create(&self, dto: CreateProductDto) -> Result<ProductResponseDto> {
        let assignment = self
            .resolver
            .resolve(dto.category_id, dto.sub_category_id)
            .await?;

        let product = self
            .products
            .create(NewProduct {
                title: dto.title.trim().to_string(),
                description: dto.description,
                featured_image: normalize_text(dto.featured_image),
                gallery: normalize_gallery(dto.gallery),
                brand_id: dto.brand_id,
                assignment,
            })
            .await?;

        tracing::info!(
            "Product created: id={}, category={:?}, sub_category={:?}",
            product.id,
            product.category_id,
            product.sub_category_id
        );

        Ok(product.into())
    }

    pub async fn update(&self, id: Uuid, dto: UpdateProductDto) -> Result<ProductResponseDto> {
        let assignment = if dto.touches_assignment() {
            Some(
                self.resolver
                    .resolve(dto.category_id, dto.sub_category_id)
                    .await?,
            )
        } else {
            None
        };

        let changes = ProductChanges {
            title: dto.title.map(|t| t.trim().to_string()),
            description: dto.description,
            featured_image: normalize_patch(dto.featured_image),
            gallery: dto.gallery.map(normalize_gallery),
            brand_id: dto.brand_id,
            assignment,
        };

        let product = self
            .products
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))?;

        tracing::info!("Product updated: id={}", product.id);
        Ok(product.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.products.delete(id).await? {
            return Err(AppError::NotFound(format!("Product {} not found", id)));
        }

        tracing::info!("Product deleted: id={}", id);
        Ok(())
    }

    pub async fn by_category(&self, category_id: Uuid) -> Result<Vec<ProductResponseDto>> {
        let products = self.products.by_category(category_id).await?;
        Ok(products.into_iter().map(|p| p.into()).collect())
    }

    pub async fn by_subcategory(&self, sub_category_id: Uuid) -> Result<Vec<ProductResponseDto>> {
        let products = self.products.by_subcategory(sub_category_id).await?;
        Ok(products.into_iter().map(|p| p.into()).collect())
    }

    /// Exact-match filter on stored fields; no hierarchy traversal
    pub async fn query(&self, params: &ProductQueryParams) -> Result<Vec<ProductResponseDto>> {
        let products = self
            .products
            .query(ProductFilter {
                category_id: params.category,
                sub_category_id: params.sub_category,
            })
            .await?;
        Ok(products.into_iter().map(|p| p.into()).collect())
    }
}
