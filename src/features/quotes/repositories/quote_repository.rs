use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::quotes::models::{NewQuote, Quote, QuoteStatus};

const QUOTE_COLUMNS: &str =
    "id, name, email, phone, details, image, status, created_at, updated_at";

/// Storage for the quote inbox, newest first
#[async_trait]
pub trait QuoteRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Quote>>;

    /// Inserts with status `pending`
    async fn create(&self, new: NewQuote) -> Result<Quote>;

    /// Returns `None` when no quote has this id
    async fn update_status(&self, id: Uuid, status: QuoteStatus) -> Result<Option<Quote>>;
}

/// PostgreSQL implementation of QuoteRepository
pub struct PgQuoteRepository {
    pool: PgPool,
}

impl PgQuoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuoteRepository for PgQuoteRepository {
    async fn list(&self) -> Result<Vec<Quote>> {
        let query = format!(
            "SELECT {} FROM quotes ORDER BY created_at DESC, id DESC",
            QUOTE_COLUMNS
        );
        sqlx::query_as::<_, Quote>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::from_query("Quote", e))
    }

    async fn create(&self, new: NewQuote) -> Result<Quote> {
        let query = format!(
            r#"
            INSERT INTO quotes (id, name, email, phone, details, image, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            QUOTE_COLUMNS
        );
        sqlx::query_as::<_, Quote>(&query)
            .bind(Uuid::now_v7())
            .bind(&new.name)
            .bind(&new.email)
            .bind(&new.phone)
            .bind(&new.details)
            .bind(&new.image)
            .bind(QuoteStatus::Pending)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::from_query("Quote", e))
    }

    async fn update_status(&self, id: Uuid, status: QuoteStatus) -> Result<Option<Quote>> {
        let query = format!(
            r#"
            UPDATE quotes
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            QUOTE_COLUMNS
        );
        sqlx::query_as::<_, Quote>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_query("Quote", e))
    }
}
