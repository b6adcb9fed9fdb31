use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::suppliers::models::{NewSupplier, Supplier};

const SUPPLIER_COLUMNS: &str = "id, first_name, last_name, email, phone, company_name, \
     job_title, street, city, zip, country, ingredients_supplied, food_safety_accreditations, \
     brochure, website, message, newsletter_subscribed, created_at";

/// Storage for supplier applications, newest first
#[async_trait]
pub trait SupplierRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Supplier>>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Supplier>>;

    async fn create(&self, new: NewSupplier) -> Result<Supplier>;
}

/// PostgreSQL implementation of SupplierRepository
pub struct PgSupplierRepository {
    pool: PgPool,
}

impl PgSupplierRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SupplierRepository for PgSupplierRepository {
    async fn list(&self) -> Result<Vec<Supplier>> {
        let query = format!(
            "SELECT {} FROM supplier_requests ORDER BY created_at DESC, id DESC",
            SUPPLIER_COLUMNS
        );
        sqlx::query_as::<_, Supplier>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::from_query("Supplier request", e))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Supplier>> {
        let query = format!(
            "SELECT {} FROM supplier_requests WHERE id = $1",
            SUPPLIER_COLUMNS
        );
        sqlx::query_as::<_, Supplier>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_query("Supplier request", e))
    }

    async fn create(&self, new: NewSupplier) -> Result<Supplier> {
        let query = format!(
            r#"
            INSERT INTO supplier_requests (
                id, first_name, last_name, email, phone, company_name, job_title,
                street, city, zip, country, ingredients_supplied, food_safety_accreditations,
                brochure, website, message, newsletter_subscribed
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING {}
            "#,
            SUPPLIER_COLUMNS
        );
        sqlx::query_as::<_, Supplier>(&query)
            .bind(Uuid::now_v7())
            .bind(&new.first_name)
            .bind(&new.last_name)
            .bind(&new.email)
            .bind(&new.phone)
            .bind(&new.company_name)
            .bind(&new.job_title)
            .bind(&new.address.street)
            .bind(&new.address.city)
            .bind(&new.address.zip)
            .bind(&new.address.country)
            .bind(&new.ingredients_supplied)
            .bind(&new.food_safety_accreditations)
            .bind(&new.brochure)
            .bind(&new.website)
            .bind(&new.message)
            .bind(new.newsletter_subscribed)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::from_query("Supplier request", e))
    }
}
