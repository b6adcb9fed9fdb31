use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::blogs::models::{Blog, BlogChanges, NewBlog};

const BLOG_COLUMNS: &str =
    "id, title, slug, content, featured_image, status, tags, created_at, updated_at";

fn map_err(e: sqlx::Error) -> AppError {
    AppError::from_unique("Blog", "slug", e)
}

/// Storage for blog posts, newest first. Slugs are unique.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Blog>>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Blog>>;

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Blog>>;

    /// Newest post matching every given field exactly
    async fn find(&self, title: Option<&str>, slug: Option<&str>) -> Result<Option<Blog>>;

    async fn create(&self, new: NewBlog) -> Result<Blog>;

    /// Returns `None` when no post has this id
    async fn update(&self, id: Uuid, changes: BlogChanges) -> Result<Option<Blog>>;

    /// Returns `false` when no post has this id
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

/// PostgreSQL implementation of BlogRepository
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlogRepository for PgBlogRepository {
    async fn list(&self) -> Result<Vec<Blog>> {
        let query = format!(
            "SELECT {} FROM blogs ORDER BY created_at DESC, id DESC",
            BLOG_COLUMNS
        );
        sqlx::query_as::<_, Blog>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_err)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Blog>> {
        let query = format!("SELECT {} FROM blogs WHERE id = $1", BLOG_COLUMNS);
        sqlx::query_as::<_, Blog>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_err)
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Blog>> {
        let query = format!("SELECT {} FROM blogs WHERE slug = $1", BLOG_COLUMNS);
        sqlx::query_as::<_, Blog>(&query)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_err)
    }

    async fn find(&self, title: Option<&str>, slug: Option<&str>) -> Result<Option<Blog>> {
        let query = format!(
            r#"
            SELECT {} FROM blogs
            WHERE ($1::text IS NULL OR title = $1)
              AND ($2::text IS NULL OR slug = $2)
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            "#,
            BLOG_COLUMNS
        );
        sqlx::query_as::<_, Blog>(&query)
            .bind(title)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_err)
    }

    async fn create(&self, new: NewBlog) -> Result<Blog> {
        let query = format!(
            r#"
            INSERT INTO blogs (id, title, slug, content, featured_image, status, tags)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            BLOG_COLUMNS
        );
        sqlx::query_as::<_, Blog>(&query)
            .bind(Uuid::now_v7())
            .bind(&new.title)
            .bind(&new.slug)
            .bind(&new.content)
            .bind(&new.featured_image)
            .bind(new.status)
            .bind(&new.tags)
            .fetch_one(&self.pool)
            .await
            .map_err(map_err)
    }

    async fn update(&self, id: Uuid, changes: BlogChanges) -> Result<Option<Blog>> {
        let query = format!(
            r#"
            UPDATE blogs
            SET title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                content = COALESCE($4, content),
                featured_image = CASE WHEN $5 THEN $6 ELSE featured_image END,
                status = COALESCE($7, status),
                tags = COALESCE($8, tags),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            BLOG_COLUMNS
        );
        sqlx::query_as::<_, Blog>(&query)
            .bind(id)
            .bind(changes.title)
            .bind(changes.slug)
            .bind(changes.content)
            .bind(changes.featured_image.is_some())
            .bind(changes.featured_image.flatten())
            .bind(changes.status)
            .bind(changes.tags)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_err)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_err)?;

        Ok(result.rows_affected() > 0)
    }
}
