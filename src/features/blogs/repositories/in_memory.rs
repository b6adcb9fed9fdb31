use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::blogs::models::{Blog, BlogChanges, NewBlog};
use crate::features::blogs::repositories::BlogRepository;

/// Vec-backed repository for tests; slugs are unique as in the table
#[derive(Default)]
pub struct InMemoryBlogRepository {
    blogs: RwLock<Vec<Blog>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn duplicate_slug() -> AppError {
        AppError::BadRequest("Blog with this slug already exists".to_string())
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn list(&self) -> Result<Vec<Blog>> {
        Ok(self.blogs.read().await.iter().rev().cloned().collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Blog>> {
        Ok(self.blogs.read().await.iter().find(|b| b.id == id).cloned())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Blog>> {
        Ok(self
            .blogs
            .read()
            .await
            .iter()
            .find(|b| b.slug == slug)
            .cloned())
    }

    async fn find(&self, title: Option<&str>, slug: Option<&str>) -> Result<Option<Blog>> {
        Ok(self
            .blogs
            .read()
            .await
            .iter()
            .rev()
            .find(|b| {
                title.map_or(true, |t| b.title == t) && slug.map_or(true, |s| b.slug == s)
            })
            .cloned())
    }

    async fn create(&self, new: NewBlog) -> Result<Blog> {
        let mut blogs = self.blogs.write().await;
        if blogs.iter().any(|b| b.slug == new.slug) {
            return Err(Self::duplicate_slug());
        }

        let now = Utc::now();
        let blog = Blog {
            id: Uuid::now_v7(),
            title: new.title,
            slug: new.slug,
            content: new.content,
            featured_image: new.featured_image,
            status: new.status,
            tags: new.tags,
            created_at: now,
            updated_at: now,
        };
        blogs.push(blog.clone());
        Ok(blog)
    }

    async fn update(&self, id: Uuid, changes: BlogChanges) -> Result<Option<Blog>> {
        let mut blogs = self.blogs.write().await;
        if let Some(slug) = &changes.slug {
            if blogs.iter().any(|b| b.id != id && &b.slug == slug) {
                return Err(Self::duplicate_slug());
            }
        }

        let Some(blog) = blogs.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        changes.apply_to(blog);
        blog.updated_at = Utc::now();
        Ok(Some(blog.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut blogs = self.blogs.write().await;
        let before = blogs.len();
        blogs.retain(|b| b.id != id);
        Ok(blogs.len() < before)
    }
}
