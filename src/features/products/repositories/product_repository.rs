use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::products::models::{NewProduct, Product, ProductChanges, ProductFilter};

const PRODUCT_COLUMNS: &str = "id, title, description, featured_image, gallery, brand_id, \
     category_id, sub_category_id, created_at, updated_at";

/// Storage for products, newest first
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Product>>;

    async fn create(&self, new: NewProduct) -> Result<Product>;

    /// Returns `None` when no product has this id
    async fn update(&self, id: Uuid, changes: ProductChanges) -> Result<Option<Product>>;

    /// Returns `false` when no product has this id
    async fn delete(&self, id: Uuid) -> Result<bool>;

    /// Exact match on the stored assignment
    async fn query(&self, filter: ProductFilter) -> Result<Vec<Product>>;

    async fn by_category(&self, category_id: Uuid) -> Result<Vec<Product>> {
        self.query(ProductFilter::by_category(category_id)).await
    }

    async fn by_subcategory(&self, sub_category_id: Uuid) -> Result<Vec<Product>> {
        self.query(ProductFilter::by_subcategory(sub_category_id))
            .await
    }
}

/// PostgreSQL implementation of ProductRepository
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self) -> Result<Vec<Product>> {
        let query = format!(
            "SELECT {} FROM products ORDER BY created_at DESC, id DESC",
            PRODUCT_COLUMNS
        );
        sqlx::query_as::<_, Product>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::from_query("Product", e))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Product>> {
        let query = format!("SELECT {} FROM products WHERE id = $1", PRODUCT_COLUMNS);
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_query("Product", e))
    }

    async fn create(&self, new: NewProduct) -> Result<Product> {
        let query = format!(
            r#"
            INSERT INTO products (
                id, title, description, featured_image, gallery,
                brand_id, category_id, sub_category_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            PRODUCT_COLUMNS
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(Uuid::now_v7())
            .bind(&new.title)
            .bind(&new.description)
            .bind(&new.featured_image)
            .bind(&new.gallery)
            .bind(new.brand_id)
            .bind(new.assignment.category_id)
            .bind(new.assignment.sub_category_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::from_query("Product", e))
    }

    async fn update(&self, id: Uuid, changes: ProductChanges) -> Result<Option<Product>> {
        let query = format!(
            r#"
            UPDATE products
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                featured_image = CASE WHEN $4 THEN $5 ELSE featured_image END,
                gallery = COALESCE($6, gallery),
                brand_id = CASE WHEN $7 THEN $8 ELSE brand_id END,
                category_id = CASE WHEN $9 THEN $10 ELSE category_id END,
                sub_category_id = CASE WHEN $9 THEN $11 ELSE sub_category_id END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            PRODUCT_COLUMNS
        );
        let assignment = changes.assignment.unwrap_or_default();
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(changes.title)
            .bind(changes.description)
            .bind(changes.featured_image.is_some())
            .bind(changes.featured_image.flatten())
            .bind(changes.gallery)
            .bind(changes.brand_id.is_some())
            .bind(changes.brand_id.flatten())
            .bind(changes.assignment.is_some())
            .bind(assignment.category_id)
            .bind(assignment.sub_category_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_query("Product", e))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_query("Product", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn query(&self, filter: ProductFilter) -> Result<Vec<Product>> {
        let query = format!(
            r#"
            SELECT {} FROM products
            WHERE ($1::uuid IS NULL OR category_id = $1)
              AND ($2::uuid IS NULL OR sub_category_id = $2)
            ORDER BY created_at DESC, id DESC
            "#,
            PRODUCT_COLUMNS
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(filter.category_id)
            .bind(filter.sub_category_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::from_query("Product", e))
    }
}
