use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Position of a category in the two-level hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CategoryKind {
    TopLevel,
    Sub { parent_id: Uuid },
}

impl From<Option<Uuid>> for CategoryKind {
    fn from(parent_id: Option<Uuid>) -> Self {
        match parent_id {
            None => CategoryKind::TopLevel,
            Some(parent_id) => CategoryKind::Sub { parent_id },
        }
    }
}

/// Database model for category
///
/// Top-level categories and subcategories share one table; `parent_id` is not a foreign key,
/// so a subcategory may outlive its parent.
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn kind(&self) -> CategoryKind {
        self.parent_id.into()
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Data for creating a new category
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub parent_id: Option<Uuid>,
}

/// Partial update; outer `None` leaves the column untouched
#[derive(Debug, Clone, Default)]
pub struct CategoryChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub image: Option<Option<String>>,
    pub parent_id: Option<Option<Uuid>>,
}

impl CategoryChanges {
    /// Apply the changes to an in-memory record
    #[cfg(test)]
    pub fn apply_to(self, category: &mut Category) {
        if let Some(name) = self.name {
            category.name = name;
        }
        if let Some(description) = self.description {
            category.description = description;
        }
        if let Some(image) = self.image {
            category.image = image;
        }
        if let Some(parent_id) = self.parent_id {
            category.parent_id = parent_id;
        }
    }
}
