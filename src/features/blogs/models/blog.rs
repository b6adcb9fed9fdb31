use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::blogs::dtos::{BlogResponseDto, BlogSummaryDto};

/// Publication state matching the database enum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "blog_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BlogStatus {
    #[default]
    Draft,
    Published,
}

/// Database model for blog post
#[derive(Debug, Clone, FromRow)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub status: BlogStatus,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewBlog {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub status: BlogStatus,
    pub tags: Vec<String>,
}

/// Partial update; outer `None` leaves the column untouched
#[derive(Debug, Clone, Default)]
pub struct BlogChanges {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub featured_image: Option<Option<String>>,
    pub status: Option<BlogStatus>,
    pub tags: Option<Vec<String>>,
}

impl BlogChanges {
    #[cfg(test)]
    pub fn apply_to(self, blog: &mut Blog) {
        if let Some(title) = self.title {
            blog.title = title;
        }
        if let Some(slug) = self.slug {
            blog.slug = slug;
        }
        if let Some(content) = self.content {
            blog.content = content;
        }
        if let Some(featured_image) = self.featured_image {
            blog.featured_image = featured_image;
        }
        if let Some(status) = self.status {
            blog.status = status;
        }
        if let Some(tags) = self.tags {
            blog.tags = tags;
        }
    }
}

impl From<Blog> for BlogResponseDto {
    fn from(b: Blog) -> Self {
        Self {
            id: b.id,
            title: b.title,
            slug: b.slug,
            content: b.content,
            featured_image: b.featured_image,
            status: b.status,
            tags: b.tags,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

impl From<Blog> for BlogSummaryDto {
    fn from(b: Blog) -> Self {
        Self {
            id: b.id,
            title: b.title,
            slug: b.slug,
            status: b.status,
            created_at: b.created_at,
        }
    }
}
