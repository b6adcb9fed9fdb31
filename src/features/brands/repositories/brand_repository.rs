use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::brands::models::{Brand, BrandChanges, NewBrand};

const BRAND_COLUMNS: &str = "id, name, description, image, created_at, updated_at";

/// Storage for brands, newest first. Names are unique.
#[async_trait]
pub trait BrandRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Brand>>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Brand>>;

    async fn create(&self, new: NewBrand) -> Result<Brand>;

    /// Returns `None` when no brand has this id
    async fn update(&self, id: Uuid, changes: BrandChanges) -> Result<Option<Brand>>;

    /// Returns `false` when no brand has this id
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

/// PostgreSQL implementation of BrandRepository
pub struct PgBrandRepository {
    pool: PgPool,
}

impl PgBrandRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BrandRepository for PgBrandRepository {
    async fn list(&self) -> Result<Vec<Brand>> {
        let query = format!(
            "SELECT {} FROM brands ORDER BY created_at DESC, id DESC",
            BRAND_COLUMNS
        );
        sqlx::query_as::<_, Brand>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Brand", e))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Brand>> {
        let query = format!("SELECT {} FROM brands WHERE id = $1", BRAND_COLUMNS);
        sqlx::query_as::<_, Brand>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Brand", e))
    }

    async fn create(&self, new: NewBrand) -> Result<Brand> {
        let query = format!(
            r#"
            INSERT INTO brands (id, name, description, image)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            BRAND_COLUMNS
        );
        sqlx::query_as::<_, Brand>(&query)
            .bind(Uuid::now_v7())
            .bind(&new.name)
            .bind(&new.description)
            .bind(&new.image)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Brand", e))
    }

    async fn update(&self, id: Uuid, changes: BrandChanges) -> Result<Option<Brand>> {
        let query = format!(
            r#"
            UPDATE brands
            SET name = COALESCE($2, name),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                image = CASE WHEN $5 THEN $6 ELSE image END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            BRAND_COLUMNS
        );
        sqlx::query_as::<_, Brand>(&query)
            .bind(id)
            .bind(changes.name)
            .bind(changes.description.is_some())
            .bind(changes.description.flatten())
            .bind(changes.image.is_some())
            .bind(changes.image.flatten())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Brand", e))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM brands WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Brand", e))?;

        Ok(result.rows_affected() > 0)
    }
}
