use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::brands::dtos::{BrandResponseDto, CreateBrandDto, UpdateBrandDto};
use crate::features::brands::models::{BrandChanges, NewBrand};
use crate::features::brands::repositories::BrandRepository;
use crate::shared::text::{normalize_patch, normalize_text};

/// Service for brand operations
pub struct BrandService {
    repo: Arc<dyn BrandRepository>,
}

impl BrandService {
    pub fn new(repo: Arc<dyn BrandRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<BrandResponseDto>> {
        let brands = self.repo.list().await?;
        Ok(brands.into_iter().map(|b| b.into()).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<BrandResponseDto> {
        self.repo
            .get_by_id(id)
            .await?
            .map(|b| b.into())
            .ok_or_else(|| Self::not_found(id))
    }

    pub async fn create(&self, dto: CreateBrandDto) -> Result<BrandResponseDto> {
        let brand = self
            .repo
            .create(NewBrand {
                name: dto.name.trim().to_string(),
                description: normalize_text(dto.description),
                image: normalize_text(dto.image),
            })
            .await?;

        tracing::info!("Brand created: id={}, name={}", brand.id, brand.name);
        Ok(brand.into())
    }

    pub async fn update(&self, id: Uuid, dto: UpdateBrandDto) -> Result<BrandResponseDto> {
        let changes = BrandChanges {
            name: dto.name.map(|n| n.trim().to_string()),
            description: normalize_patch(dto.description),
            image: normalize_patch(dto.image),
        };

        let brand = self
            .repo
            .update(id, changes)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        tracing::info!("Brand updated: id={}", brand.id);
        Ok(brand.into())
    }

    /// Products keep their `brand_id` after the brand is gone
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(Self::not_found(id));
        }

        tracing::info!("Brand deleted: id={}", id);
        Ok(())
    }

    fn not_found(id: Uuid) -> AppError {
        AppError::NotFound(format!("Brand {} not found", id))
    }
}
