use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::quotes::models::QuoteStatus;
use crate::shared::validation::{validate_not_blank, PHONE_REGEX};

/// Request DTO for submitting a quote
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateQuoteDto {
    #[validate(
        length(min = 1, max = 255, message = "Name must be 1-255 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: String,

    #[validate(
        length(min = 1, max = 5000, message = "Details must be 1-5000 characters"),
        custom(function = "validate_not_blank")
    )]
    pub details: String,

    /// URL of an attached reference image
    #[validate(length(max = 2048))]
    pub image: Option<String>,
}

/// Request DTO for moving a quote to another status
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateQuoteStatusDto {
    pub status: QuoteStatus,
}

/// Response DTO for quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuoteResponseDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub status: QuoteStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
