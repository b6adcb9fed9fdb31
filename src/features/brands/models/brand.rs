use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::brands::dtos::BrandResponseDto;

/// Database model for brand
#[derive(Debug, Clone, FromRow)]
pub struct Brand {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new brand
#[derive(Debug, Clone)]
pub struct NewBrand {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Partial update; outer `None` leaves the column untouched
#[derive(Debug, Clone, Default)]
pub struct BrandChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub image: Option<Option<String>>,
}

impl BrandChanges {
    #[cfg(test)]
    pub fn apply_to(self, brand: &mut Brand) {
        if let Some(name) = self.name {
            brand.name = name;
        }
        if let Some(description) = self.description {
            brand.description = description;
        }
        if let Some(image) = self.image {
            brand.image = image;
        }
    }
}

impl From<Brand> for BrandResponseDto {
    fn from(b: Brand) -> Self {
        Self {
            id: b.id,
            name: b.name,
            description: b.description,
            image: b.image,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}
