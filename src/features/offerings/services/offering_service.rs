use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::offerings::dtos::{
    CreateOfferingDto, OfferingResponseDto, UpdateOfferingDto,
};
use crate::features::offerings::models::{NewOffering, OfferingChanges};
use crate::features::offerings::repositories::OfferingRepository;
use crate::shared::text::{normalize_patch, normalize_text};

/// Service for the offered-services catalog
pub struct OfferingService {
    repo: Arc<dyn OfferingRepository>,
}

impl OfferingService {
    pub fn new(repo: Arc<dyn OfferingRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<OfferingResponseDto>> {
        let offerings = self.repo.list().await?;
        Ok(offerings.into_iter().map(|o| o.into()).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<OfferingResponseDto> {
        self.repo
            .get_by_id(id)
            .await?
            .map(|o| o.into())
            .ok_or_else(Self::not_found)
    }

    pub async fn create(&self, dto: CreateOfferingDto) -> Result<OfferingResponseDto> {
        let offering = self
            .repo
            .create(NewOffering {
                title: dto.title.trim().to_string(),
                description: dto.description,
                featured_image: normalize_text(dto.featured_image),
            })
            .await?;

        tracing::info!("Service created: id={}, title={}", offering.id, offering.title);
        Ok(offering.into())
    }

    pub async fn update(&self, id: Uuid, dto: UpdateOfferingDto) -> Result<OfferingResponseDto> {
        let changes = OfferingChanges {
            title: dto.title.map(|t| t.trim().to_string()),
            description: dto.description,
            featured_image: normalize_patch(dto.featured_image),
        };

        let offering = self
            .repo
            .update(id, changes)
            .await?
            .ok_or_else(Self::not_found)?;

        tracing::info!("Service updated: id={}", offering.id);
        Ok(offering.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(Self::not_found());
        }

        tracing::info!("Service deleted: id={}", id);
        Ok(())
    }

    fn not_found() -> AppError {
        AppError::NotFound("Service not found".to_string())
    }
}
