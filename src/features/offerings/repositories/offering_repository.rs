use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::offerings::models::{NewOffering, Offering, OfferingChanges};

const OFFERING_COLUMNS: &str = "id, title, description, featured_image, created_at, updated_at";

/// Storage for offered services, newest first
#[async_trait]
pub trait OfferingRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Offering>>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Offering>>;

    async fn create(&self, new: NewOffering) -> Result<Offering>;

    /// Returns `None` when no service has this id
    async fn update(&self, id: Uuid, changes: OfferingChanges) -> Result<Option<Offering>>;

    /// Returns `false` when no service has this id
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

/// PostgreSQL implementation of OfferingRepository
pub struct PgOfferingRepository {
    pool: PgPool,
}

impl PgOfferingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OfferingRepository for PgOfferingRepository {
    async fn list(&self) -> Result<Vec<Offering>> {
        let query = format!(
            "SELECT {} FROM services ORDER BY created_at DESC, id DESC",
            OFFERING_COLUMNS
        );
        sqlx::query_as::<_, Offering>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::from_query("Service", e))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Offering>> {
        let query = format!("SELECT {} FROM services WHERE id = $1", OFFERING_COLUMNS);
        sqlx::query_as::<_, Offering>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_query("Service", e))
    }

    async fn create(&self, new: NewOffering) -> Result<Offering> {
        let query = format!(
            r#"
            INSERT INTO services (id, title, description, featured_image)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            OFFERING_COLUMNS
        );
        sqlx::query_as::<_, Offering>(&query)
            .bind(Uuid::now_v7())
            .bind(&new.title)
            .bind(&new.description)
            .bind(&new.featured_image)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::from_query("Service", e))
    }

    async fn update(&self, id: Uuid, changes: OfferingChanges) -> Result<Option<Offering>> {
        let query = format!(
            r#"
            UPDATE services
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                featured_image = CASE WHEN $4 THEN $5 ELSE featured_image END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            OFFERING_COLUMNS
        );
        sqlx::query_as::<_, Offering>(&query)
            .bind(id)
            .bind(changes.title)
            .bind(changes.description)
            .bind(changes.featured_image.is_some())
            .bind(changes.featured_image.flatten())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_query("Service", e))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_query("Service", e))?;

        Ok(result.rows_affected() > 0)
    }
}
