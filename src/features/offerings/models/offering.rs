use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::offerings::dtos::OfferingResponseDto;

/// Database model for an offered service
#[derive(Debug, Clone, FromRow)]
pub struct Offering {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub featured_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewOffering {
    pub title: String,
    pub description: String,
    pub featured_image: Option<String>,
}

/// Partial update; outer `None` leaves the column untouched
#[derive(Debug, Clone, Default)]
pub struct OfferingChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub featured_image: Option<Option<String>>,
}

impl OfferingChanges {
    #[cfg(test)]
    pub fn apply_to(self, offering: &mut Offering) {
        if let Some(title) = self.title {
            offering.title = title;
        }
        if let Some(description) = self.description {
            offering.description = description;
        }
        if let Some(featured_image) = self.featured_image {
            offering.featured_image = featured_image;
        }
    }
}

impl From<Offering> for OfferingResponseDto {
    fn from(o: Offering) -> Self {
        Self {
            id: o.id,
            title: o.title,
            description: o.description,
            featured_image: o.featured_image,
            created_at: o.created_at,
            updated_at: o.updated_at,
        }
    }
}
