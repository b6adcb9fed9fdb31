use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::shared::validation::validate_not_blank;

/// Request DTO for creating a brand
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBrandDto {
    #[validate(
        length(min = 1, max = 200, message = "Name must be 1-200 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,

    pub description: Option<String>,

    #[validate(length(max = 2048))]
    pub image: Option<String>,
}

/// Request DTO for updating a brand
///
/// Omitted fields are left unchanged; an empty `description` or `image` clears it.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBrandDto {
    #[validate(
        length(min = 1, max = 200, message = "Name must be 1-200 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(length(max = 2048))]
    pub image: Option<String>,
}

/// Response DTO for brand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BrandResponseDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_requires_name() {
        let dto: CreateBrandDto = serde_json::from_value(json!({ "name": "" })).unwrap();
        assert!(dto.validate().is_err());

        assert!(serde_json::from_value::<CreateBrandDto>(json!({ "image": "x" })).is_err());

        let dto: CreateBrandDto =
            serde_json::from_value(json!({ "name": "Everest", "description": "Masalas" })).unwrap();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_update_allows_partial_body() {
        let dto: UpdateBrandDto = serde_json::from_value(json!({})).unwrap();
        assert!(dto.validate().is_ok());
        assert!(dto.name.is_none());

        let dto: UpdateBrandDto = serde_json::from_value(json!({ "name": "" })).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_whitespace_name_rejected() {
        let dto: CreateBrandDto = serde_json::from_value(json!({ "name": "   " })).unwrap();
        assert!(dto.validate().unwrap_err().field_errors().contains_key("name"));

        let dto: UpdateBrandDto = serde_json::from_value(json!({ "name": " \t" })).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_long_image_url_rejected() {
        let image = format!("https://cdn.example.com/{}", "a".repeat(2048));
        let dto: CreateBrandDto =
            serde_json::from_value(json!({ "name": "MDH", "image": image })).unwrap();
        assert!(dto.validate().is_err());
    }
}
