use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::categories::models::{Category, CategoryKind};
use crate::shared::serde_helpers::{empty_string_as_none, patch_field};
use crate::shared::validation::validate_not_blank;

/// Request DTO for creating a category
///
/// Without `parent_id` the category is top-level; with it, a subcategory.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    pub name: String,

    pub description: Option<String>,

    /// URL returned by the upload endpoint
    #[validate(length(max = 2048))]
    pub image: Option<String>,

    #[serde(default, alias = "parent", deserialize_with = "empty_string_as_none")]
    #[schema(value_type = Option<Uuid>)]
    pub parent_id: Option<Uuid>,
}

/// Request DTO for updating a category; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    pub name: Option<String>,

    /// Empty string clears the description
    pub description: Option<String>,

    /// Empty string clears the image
    #[validate(length(max = 2048))]
    pub image: Option<String>,

    /// `null` or `""` detaches the category from its parent
    #[serde(default, alias = "parent", deserialize_with = "patch_field")]
    #[schema(value_type = Option<Uuid>)]
    pub parent_id: Option<Option<Uuid>>,
}

/// Request DTO for creating a subcategory (parent is mandatory)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateSubcategoryDto {
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    pub name: String,

    pub description: Option<String>,

    #[validate(length(max = 2048))]
    pub image: Option<String>,

    #[serde(default, alias = "parent", deserialize_with = "empty_string_as_none")]
    #[schema(value_type = Option<Uuid>)]
    pub parent_id: Option<Uuid>,
}

/// Request DTO for updating a subcategory (parent is mandatory)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateSubcategoryDto {
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(length(max = 2048))]
    pub image: Option<String>,

    #[serde(default, alias = "parent", deserialize_with = "empty_string_as_none")]
    #[schema(value_type = Option<Uuid>)]
    pub parent_id: Option<Uuid>,
}

/// Query params for listing categories
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListCategoriesQuery {
    /// If true, return tree structure. Default: false (flat list)
    #[serde(default)]
    pub tree: bool,
}

/// Query params for listing the children of one parent
#[derive(Debug, Deserialize, IntoParams)]
pub struct NestedSubcategoriesQuery {
    #[serde(default, alias = "parentId", deserialize_with = "empty_string_as_none")]
    #[param(value_type = Option<Uuid>)]
    pub parent_id: Option<Uuid>,
}

/// Response DTO for category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub kind: CategoryKind,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            parent_id: c.parent_id,
            kind: c.kind(),
            name: c.name,
            description: c.description,
            image: c.image,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Response DTO for subcategory with its parent populated
///
/// `parent` is `None` when the parent category has been deleted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubcategoryResponseDto {
    pub id: Uuid,
    pub parent_id: Uuid,
    pub parent: Option<CategoryResponseDto>,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SubcategoryResponseDto {
    /// Returns `None` for a top-level category
    pub fn from_parts(category: Category, parent: Option<Category>) -> Option<Self> {
        let parent_id = category.parent_id?;
        Some(Self {
            id: category.id,
            parent_id,
            parent: parent.map(CategoryResponseDto::from),
            name: category.name,
            description: category.description,
            image: category.image,
            created_at: category.created_at,
            updated_at: category.updated_at,
        })
    }
}

/// Response DTO for category tree (hierarchical structure)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(no_recursion)]
pub struct CategoryTreeDto {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub children: Vec<CategoryTreeDto>,
}

impl CategoryTreeDto {
    /// Build tree from flat list of categories
    ///
    /// Only categories without a parent become roots; orphaned subcategories are left out.
    pub fn build_tree(categories: &[Category]) -> Vec<CategoryTreeDto> {
        categories
            .iter()
            .filter(|c| c.parent_id.is_none())
            .map(|root| Self::build_node(root, categories))
            .collect()
    }

    /// Build the subtree rooted at `category`
    pub fn build_node(category: &Category, all_categories: &[Category]) -> CategoryTreeDto {
        let children: Vec<CategoryTreeDto> = all_categories
            .iter()
            .filter(|c| c.parent_id == Some(category.id) && c.id != category.id)
            .map(|child| Self::build_node(child, all_categories))
            .collect();

        CategoryTreeDto {
            id: category.id,
            parent_id: category.parent_id,
            name: category.name.clone(),
            description: category.description.clone(),
            image: category.image.clone(),
            children,
        }
    }
}
