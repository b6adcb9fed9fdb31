use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::shared::serde_helpers::empty_string_as_none;
use crate::shared::validation::{validate_not_blank, PHONE_REGEX};

/// Postal address on a supplier application; every line is required
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct SupplierAddressDto {
    #[validate(length(min = 1, max = 255), custom(function = "validate_not_blank"))]
    pub street: String,

    #[validate(length(min = 1, max = 120), custom(function = "validate_not_blank"))]
    pub city: String,

    #[validate(length(min = 1, max = 20), custom(function = "validate_not_blank"))]
    pub zip: String,

    #[validate(length(min = 1, max = 120), custom(function = "validate_not_blank"))]
    pub country: String,
}

/// Request DTO for submitting a supplier application
///
/// Accepts the storefront form's camelCase field names.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateSupplierDto {
    #[serde(alias = "firstName")]
    #[validate(length(min = 1, max = 100), custom(function = "validate_not_blank"))]
    pub first_name: String,

    #[serde(alias = "lastName")]
    #[validate(length(min = 1, max = 100), custom(function = "validate_not_blank"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: String,

    #[serde(alias = "companyName")]
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    pub company_name: String,

    #[serde(alias = "jobTitle")]
    #[validate(length(min = 1, max = 100), custom(function = "validate_not_blank"))]
    pub job_title: String,

    #[validate(nested)]
    pub address: SupplierAddressDto,

    #[serde(alias = "ingredientsSupplied")]
    #[validate(length(min = 1, max = 5000), custom(function = "validate_not_blank"))]
    pub ingredients_supplied: String,

    #[serde(alias = "foodSafetyAccreditations")]
    #[validate(length(min = 1, max = 5000), custom(function = "validate_not_blank"))]
    pub food_safety_accreditations: String,

    /// URL of the uploaded brochure
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = 2048))]
    pub brochure: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(url(message = "Invalid website URL"))]
    pub website: Option<String>,

    #[validate(length(max = 5000))]
    pub message: Option<String>,

    #[serde(default, alias = "newsletterSubscribed")]
    pub newsletter_subscribed: bool,
}

/// Response DTO for a supplier application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SupplierResponseDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub job_title: String,
    pub address: SupplierAddressDto,
    pub ingredients_supplied: String,
    pub food_safety_accreditations: String,
    pub brochure: Option<String>,
    pub website: Option<String>,
    pub message: Option<String>,
    pub newsletter_subscribed: bool,
    pub created_at: DateTime<Utc>,
}
