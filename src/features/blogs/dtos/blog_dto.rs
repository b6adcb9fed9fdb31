use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::blogs::models::BlogStatus;
use crate::shared::serde_helpers::empty_string_as_none;
use crate::shared::validation::validate_not_blank;

const MAX_TAGS: usize = 20;

fn validate_tags(tags: &[String]) -> Result<(), ValidationError> {
    if tags.len() > MAX_TAGS {
        return Err(ValidationError::new("too_many_tags")
            .with_message(format!("at most {} tags", MAX_TAGS).into()));
    }
    if tags.iter().any(|t| t.len() > 50) {
        return Err(ValidationError::new("tag_too_long")
            .with_message("tags must be at most 50 characters".into()));
    }
    Ok(())
}

/// Request DTO for creating a blog post; the slug is generated from the title
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBlogDto {
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    pub title: String,

    #[validate(length(min = 1), custom(function = "validate_not_blank"))]
    pub content: String,

    #[serde(alias = "featuredImage")]
    #[validate(length(max = 2048))]
    pub featured_image: Option<String>,

    /// Defaults to `draft`
    #[serde(default)]
    pub status: BlogStatus,

    #[serde(default)]
    #[validate(custom(function = "validate_tags"))]
    pub tags: Vec<String>,
}

/// Request DTO for updating a blog post; omitted fields are left unchanged
///
/// A new title also produces a new slug.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBlogDto {
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    pub title: Option<String>,

    #[validate(length(min = 1), custom(function = "validate_not_blank"))]
    pub content: Option<String>,

    /// Empty string removes the featured image
    #[serde(alias = "featuredImage")]
    #[validate(length(max = 2048))]
    pub featured_image: Option<String>,

    pub status: Option<BlogStatus>,

    #[validate(custom(function = "validate_tags"))]
    pub tags: Option<Vec<String>>,
}

/// Lookup by exact title and/or slug; at least one is required
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct VerifyBlogDto {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub slug: Option<String>,
}

/// Response DTO for a blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BlogResponseDto {
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

/// Blog post without its content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BlogSummaryDto {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub status: BlogStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BlogVerificationDto {
    pub exists: bool,
    pub blog: Option<BlogSummaryDto>,
}
