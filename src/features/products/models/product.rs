use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for product
///
/// `category_id`/`sub_category_id` hold the resolved pair. They are plain columns, not
/// foreign keys, and may point at deleted categories.
#[derive(Debug, Clone, FromRow)]
pub struct Product {
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

impl Product {
    pub fn assignment(&self) -> CategoryAssignment {
        CategoryAssignment {
            category_id: self.category_id,
            sub_category_id: self.sub_category_id,
        }
    }
}

/// Canonical (category, subcategory) pair stored on a product
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryAssignment {
    pub category_id: Option<Uuid>,
    pub sub_category_id: Option<Uuid>,
}

impl CategoryAssignment {
    pub fn top_level(category_id: Uuid) -> Self {
        Self {
            category_id: Some(category_id),
            sub_category_id: None,
        }
    }

    pub fn with_sub(category_id: Uuid, sub_category_id: Uuid) -> Self {
        Self {
            category_id: Some(category_id),
            sub_category_id: Some(sub_category_id),
        }
    }
}

/// Data for creating a new product
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub featured_image: Option<String>,
    pub gallery: Vec<String>,
    pub brand_id: Option<Uuid>,
    pub assignment: CategoryAssignment,
}

/// Partial update; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub featured_image: Option<Option<String>>,
    pub gallery: Option<Vec<String>>,
    pub brand_id: Option<Option<Uuid>>,
    pub assignment: Option<CategoryAssignment>,
}

impl ProductChanges {
    #[cfg(test)]
    pub fn apply_to(self, product: &mut Product) {
        if let Some(title) = self.title {
            product.title = title;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(featured_image) = self.featured_image {
            product.featured_image = featured_image;
        }
        if let Some(gallery) = self.gallery {
            product.gallery = gallery;
        }
        if let Some(brand_id) = self.brand_id {
            product.brand_id = brand_id;
        }
        if let Some(assignment) = self.assignment {
            product.category_id = assignment.category_id;
            product.sub_category_id = assignment.sub_category_id;
        }
    }
}

/// Exact-match filter on the stored assignment; unset fields match anything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub category_id: Option<Uuid>,
    pub sub_category_id: Option<Uuid>,
}

impl ProductFilter {
    pub fn by_category(category_id: Uuid) -> Self {
        Self {
            category_id: Some(category_id),
            sub_category_id: None,
        }
    }

    pub fn by_subcategory(sub_category_id: Uuid) -> Self {
        Self {
            category_id: None,
            sub_category_id: Some(sub_category_id),
        }
    }

    #[cfg(test)]
    pub fn matches(&self, product: &Product) -> bool {
        self.category_id
            .map_or(true, |id| product.category_id == Some(id))
            && self
                .sub_category_id
                .map_or(true, |id| product.sub_category_id == Some(id))
    }
}
