use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::shared::validation::validate_not_blank;

/// Request DTO for creating a service
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateOfferingDto {
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    pub title: String,

    #[validate(length(min = 1), custom(function = "validate_not_blank"))]
    pub description: String,

    #[serde(alias = "featuredImage")]
    #[validate(length(max = 2048))]
    pub featured_image: Option<String>,
}

/// Request DTO for updating a service; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateOfferingDto {
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    pub title: Option<String>,

    #[validate(length(min = 1), custom(function = "validate_not_blank"))]
    pub description: Option<String>,

    /// Empty string removes the featured image
    #[serde(alias = "featuredImage")]
    #[validate(length(max = 2048))]
    pub featured_image: Option<String>,
}

/// Response DTO for a service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OfferingResponseDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub featured_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
