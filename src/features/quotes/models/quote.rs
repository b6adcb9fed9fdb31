use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::quotes::dtos::QuoteResponseDto;

/// Quote status enum matching database enum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "quote_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Rejected,
}

impl std::fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuoteStatus::Pending => write!(f, "pending"),
            QuoteStatus::InProgress => write!(f, "in_progress"),
            QuoteStatus::Completed => write!(f, "completed"),
            QuoteStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Database model for quote
#[derive(Debug, Clone, FromRow)]
pub struct Quote {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub details: String,
    pub image: Option<String>,
    pub status: QuoteStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for a new quote; the status always starts at `pending`
#[derive(Debug, Clone)]
pub struct NewQuote {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub details: String,
    pub image: Option<String>,
}

impl From<Quote> for QuoteResponseDto {
    fn from(q: Quote) -> Self {
        Self {
            id: q.id,
            name: q.name,
            email: q.email,
            phone: q.phone,
            details: q.details,
            image: q.image,
            status: q.status,
            created_at: q.created_at,
            updated_at: q.updated_at,
        }
    }
}
