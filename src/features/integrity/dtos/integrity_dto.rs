use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A single dangling or inconsistent reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegrityIssue {
    /// Subcategory whose parent no longer exists
    OrphanedSubcategory { category_id: Uuid, parent_id: Uuid },

    /// Product with no category, or one pointing at a missing record
    MissingCategory {
        product_id: Uuid,
        category_id: Option<Uuid>,
    },

    /// Product whose subcategory points at a missing record
    MissingSubcategory {
        product_id: Uuid,
        sub_category_id: Uuid,
    },

    /// Both records exist but the stored pair breaks the two-level hierarchy
    MismatchedAssignment {
        product_id: Uuid,
        category_id: Uuid,
        sub_category_id: Option<Uuid>,
    },
}

/// Response DTO for the integrity report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IntegrityReportDto {
    pub categories_checked: usize,
    pub products_checked: usize,
    pub issues: Vec<IntegrityIssue>,
}
