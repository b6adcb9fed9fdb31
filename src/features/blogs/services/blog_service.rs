use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::blogs::dtos::{
    BlogResponseDto, BlogVerificationDto, CreateBlogDto, UpdateBlogDto, VerifyBlogDto,
};
use crate::features::blogs::models::{Blog, BlogChanges, NewBlog};
use crate::features::blogs::repositories::BlogRepository;
use crate::shared::text::{normalize_patch, normalize_text, slugify};

/// Slugs that would shadow a fixed route under `/api/blogs`
const RESERVED_SLUGS: &[&str] = &["verify"];

fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().to_string();
        if !tag.is_empty() && !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }
    normalized
}

/// Service for blog posts
pub struct BlogService {
    repo: Arc<dyn BlogRepository>,
}

impl BlogService {
    pub fn new(repo: Arc<dyn BlogRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<BlogResponseDto>> {
        let blogs = self.repo.list().await?;
        Ok(blogs.into_iter().map(|b| b.into()).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<BlogResponseDto> {
        self.find(id).await.map(|b| b.into())
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<BlogResponseDto> {
        self.repo
            .get_by_slug(slug)
            .await?
            .map(|b| b.into())
            .ok_or_else(Self::not_found)
    }

    pub async fn create(&self, dto: CreateBlogDto) -> Result<BlogResponseDto> {
        let title = dto.title.trim().to_string();
        let slug = self.unique_slug(&title, None).await?;

        let blog = self
            .repo
            .create(NewBlog {
                title,
                slug,
                content: dto.content,
                featured_image: normalize_text(dto.featured_image),
                status: dto.status,
                tags: normalize_tags(dto.tags),
            })
            .await?;

        tracing::info!("Blog created: id={}, slug={}", blog.id, blog.slug);
        Ok(blog.into())
    }

    pub async fn update(&self, id: Uuid, dto: UpdateBlogDto) -> Result<BlogResponseDto> {
        let current = self.find(id).await?;

        let title = dto
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| *t != current.title);
        let slug = match &title {
            Some(title) => Some(self.unique_slug(title, Some(id)).await?),
            None => None,
        };

        let changes = BlogChanges {
            title,
            slug,
            content: dto.content,
            featured_image: normalize_patch(dto.featured_image),
            status: dto.status,
            tags: dto.tags.map(normalize_tags),
        };

        let blog = self
            .repo
            .update(id, changes)
            .await?
            .ok_or_else(Self::not_found)?;

        tracing::info!("Blog updated: id={}, slug={}", blog.id, blog.slug);
        Ok(blog.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(Self::not_found());
        }

        tracing::info!("Blog deleted: id={}", id);
        Ok(())
    }

    /// Whether a post with this exact title and/or slug exists
    pub async fn verify(&self, dto: VerifyBlogDto) -> Result<BlogVerificationDto> {
        if dto.title.is_none() && dto.slug.is_none() {
            return Err(AppError::BadRequest(
                "Either title or slug must be provided".to_string(),
            ));
        }

        let blog = self
            .repo
            .find(dto.title.as_deref(), dto.slug.as_deref())
            .await?;
        Ok(BlogVerificationDto {
            exists: blog.is_some(),
            blog: blog.map(|b| b.into()),
        })
    }

    async fn find(&self, id: Uuid) -> Result<Blog> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(Self::not_found)
    }

    /// Slug for `title`, suffixed `-2`, `-3`, ... until no other post uses it
    async fn unique_slug(&self, title: &str, owner: Option<Uuid>) -> Result<String> {
        let mut base = slugify(title);
        if base.is_empty() {
            base = "untitled".to_string();
        }

        let mut candidate = base.clone();
        let mut n = 1;
        loop {
            let taken = RESERVED_SLUGS.contains(&candidate.as_str())
                || matches!(
                    self.repo.get_by_slug(&candidate).await?,
                    Some(other) if Some(other.id) != owner
                );
            if !taken {
                return Ok(candidate);
            }
            n += 1;
            candidate = format!("{}-{}", base, n);
        }
    }

    fn not_found() -> AppError {
        AppError::NotFound("Blog not found".to_string())
    }
}
