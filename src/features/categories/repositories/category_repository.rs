use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, CategoryChanges, NewCategory};

const CATEGORY_COLUMNS: &str =
    "id, parent_id, name, description, image, created_at, updated_at";

/// Storage for the category hierarchy
///
/// Lists are ordered newest first. No operation cascades: deleting a category leaves its
/// children and any products that reference it untouched.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Category>>;

    /// All categories that have a parent
    async fn list_subcategories(&self) -> Result<Vec<Category>>;

    async fn list_children(&self, parent_id: Uuid) -> Result<Vec<Category>>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Category>>;

    async fn create(&self, new: NewCategory) -> Result<Category>;

    /// Returns `None` when no category has this id
    async fn update(&self, id: Uuid, changes: CategoryChanges) -> Result<Option<Category>>;

    /// Returns `false` when no category has this id
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

/// PostgreSQL implementation of CategoryRepository
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>> {
        let query = format!(
            "SELECT {} FROM categories ORDER BY created_at DESC, id DESC",
            CATEGORY_COLUMNS
        );
        sqlx::query_as::<_, Category>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Category", e))
    }

    async fn list_subcategories(&self) -> Result<Vec<Category>> {
        let query = format!(
            "SELECT {} FROM categories WHERE parent_id IS NOT NULL ORDER BY created_at DESC, id DESC",
            CATEGORY_COLUMNS
        );
        sqlx::query_as::<_, Category>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Category", e))
    }

    async fn list_children(&self, parent_id: Uuid) -> Result<Vec<Category>> {
        let query = format!(
            "SELECT {} FROM categories WHERE parent_id = $1 ORDER BY created_at DESC, id DESC",
            CATEGORY_COLUMNS
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(parent_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Category", e))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Category>> {
        let query = format!("SELECT {} FROM categories WHERE id = $1", CATEGORY_COLUMNS);
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Category", e))
    }

    async fn create(&self, new: NewCategory) -> Result<Category> {
        let query = format!(
            r#"
            INSERT INTO categories (id, parent_id, name, description, image)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            CATEGORY_COLUMNS
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(Uuid::now_v7())
            .bind(new.parent_id)
            .bind(&new.name)
            .bind(&new.description)
            .bind(&new.image)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Category", e))
    }

    async fn update(&self, id: Uuid, changes: CategoryChanges) -> Result<Option<Category>> {
        let query = format!(
            r#"
            UPDATE categories
            SET name = COALESCE($2, name),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                image = CASE WHEN $5 THEN $6 ELSE image END,
                parent_id = CASE WHEN $7 THEN $8 ELSE parent_id END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            CATEGORY_COLUMNS
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(changes.name)
            .bind(changes.description.is_some())
            .bind(changes.description.flatten())
            .bind(changes.image.is_some())
            .bind(changes.image.flatten())
            .bind(changes.parent_id.is_some())
            .bind(changes.parent_id.flatten())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Category", e))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Category", e))?;

        Ok(result.rows_affected() > 0)
    }
}
