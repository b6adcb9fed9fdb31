use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::products::models::Product;
use crate::shared::constants::MAX_GALLERY_IMAGES;
use crate::shared::serde_helpers::{empty_string_as_none, patch_field};
use crate::shared::validation::validate_not_blank;

fn validate_gallery(gallery: &[String]) -> Result<(), ValidationError> {
    if gallery.len() > MAX_GALLERY_IMAGES {
        return Err(ValidationError::new("gallery_too_large")
            .with_message(format!("at most {} gallery images", MAX_GALLERY_IMAGES).into()));
    }
    Ok(())
}

/// Request DTO for creating a product
///
/// `category_id` and `sub_category_id` may be given in any combination; the stored pair is
/// resolved against the category hierarchy.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProductDto {
    #[validate(length(min = 1, max = 300), custom(function = "validate_not_blank"))]
    pub title: String,

    #[validate(length(min = 1), custom(function = "validate_not_blank"))]
    pub description: String,

    #[serde(alias = "featuredImage")]
    #[validate(length(max = 2048))]
    pub featured_image: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_gallery"))]
    pub gallery: Vec<String>,

    #[serde(default, alias = "brand", deserialize_with = "empty_string_as_none")]
    #[schema(value_type = Option<Uuid>)]
    pub brand_id: Option<Uuid>,

    #[serde(default, alias = "category", deserialize_with = "empty_string_as_none")]
    #[schema(value_type = Option<Uuid>)]
    pub category_id: Option<Uuid>,

    #[serde(
        default,
        alias = "subCategory",
        alias = "sub_category",
        deserialize_with = "empty_string_as_none"
    )]
    #[schema(value_type = Option<Uuid>)]
    pub sub_category_id: Option<Uuid>,
}

/// Request DTO for updating a product; omitted fields are left unchanged
///
/// Supplying either `category_id` or `sub_category_id` re-resolves the whole pair.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProductDto {
    #[validate(length(min = 1, max = 300), custom(function = "validate_not_blank"))]
    pub title: Option<String>,

    #[validate(length(min = 1), custom(function = "validate_not_blank"))]
    pub description: Option<String>,

    /// Empty string removes the featured image
    #[serde(alias = "featuredImage")]
    #[validate(length(max = 2048))]
    pub featured_image: Option<String>,

    #[validate(custom(function = "validate_gallery"))]
    pub gallery: Option<Vec<String>>,

    /// `null` or `""` removes the brand
    #[serde(default, alias = "brand", deserialize_with = "patch_field")]
    #[schema(value_type = Option<Uuid>)]
    pub brand_id: Option<Option<Uuid>>,

    #[serde(default, alias = "category", deserialize_with = "empty_string_as_none")]
    #[schema(value_type = Option<Uuid>)]
    pub category_id: Option<Uuid>,

    #[serde(
        default,
        alias = "subCategory",
        alias = "sub_category",
        deserialize_with = "empty_string_as_none"
    )]
    #[schema(value_type = Option<Uuid>)]
    pub sub_category_id: Option<Uuid>,
}

impl UpdateProductDto {
    pub fn touches_assignment(&self) -> bool {
        self.category_id.is_some() || self.sub_category_id.is_some()
    }
}

/// Query params for the flexible product filter
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ProductQueryParams {
    /// Stored (top-level) category id
    #[serde(default, alias = "category_id", deserialize_with = "empty_string_as_none")]
    #[param(value_type = Option<Uuid>)]
    pub category: Option<Uuid>,

    /// Stored subcategory id
    #[serde(
        default,
        alias = "subCategory",
        alias = "subcategory",
        alias = "sub_category_id",
        deserialize_with = "empty_string_as_none"
    )]
    #[param(value_type = Option<Uuid>)]
    pub sub_category: Option<Uuid>,
}

/// Response DTO for product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponseDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub featured_image: Option<String>,
    pub gallery: Vec<String>,
    pub brand_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub sub_category_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponseDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            featured_image: p.featured_image,
            gallery: p.gallery,
            brand_id: p.brand_id,
            category_id: p.category_id,
            sub_category_id: p.sub_category_id,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
