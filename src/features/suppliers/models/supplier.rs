use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::suppliers::dtos::{SupplierAddressDto, SupplierResponseDto};

/// Postal address columns of a supplier application
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct SupplierAddress {
    pub street: String,
    pub city: String,
    pub zip: String,
    pub country: String,
}

/// Database model for a supplier application
#[derive(Debug, Clone, FromRow)]
pub struct Supplier {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub job_title: String,
    #[sqlx(flatten)]
    pub address: SupplierAddress,
    pub ingredients_supplied: String,
    pub food_safety_accreditations: String,
    pub brochure: Option<String>,
    pub website: Option<String>,
    pub message: Option<String>,
    pub newsletter_subscribed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSupplier {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub job_title: String,
    pub address: SupplierAddress,
    pub ingredients_supplied: String,
    pub food_safety_accreditations: String,
    pub brochure: Option<String>,
    pub website: Option<String>,
    pub message: Option<String>,
    pub newsletter_subscribed: bool,
}

impl From<SupplierAddress> for SupplierAddressDto {
    fn from(a: SupplierAddress) -> Self {
        Self {
            street: a.street,
            city: a.city,
            zip: a.zip,
            country: a.country,
        }
    }
}

impl From<Supplier> for SupplierResponseDto {
    fn from(s: Supplier) -> Self {
        Self {
            id: s.id,
            first_name: s.first_name,
            last_name: s.last_name,
            email: s.email,
            phone: s.phone,
            company_name: s.company_name,
            job_title: s.job_title,
            address: s.address.into(),
            ingredients_supplied: s.ingredients_supplied,
            food_safety_accreditations: s.food_safety_accreditations,
            brochure: s.brochure,
            website: s.website,
            message: s.message,
            newsletter_subscribed: s.newsletter_subscribed,
            created_at: s.created_at,
        }
    }
}
