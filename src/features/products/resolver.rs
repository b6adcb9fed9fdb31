//! Category assignment for products.
//!
//! Clients may send a subcategory id in `category`, a top-level id in `sub_category`, or a
//! consistent pair. Every variant collapses to the same stored pair: the top-level category
//! in `category_id` and, when present, one of its children in `sub_category_id`.

use std::sync::Arc;

use uuid::Uuid;

use crate::core::config::ResolutionMode;
use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, CategoryKind};
use crate::features::categories::CategoryRepository;
use crate::features::products::models::CategoryAssignment;

pub struct CategoryResolver {
    categories: Arc<dyn CategoryRepository>,
    mode: ResolutionMode,
}

impl CategoryResolver {
    pub fn new(categories: Arc<dyn CategoryRepository>, mode: ResolutionMode) -> Self {
        Self { categories, mode }
    }

    /// Normalize a submitted `(category, sub_category)` pair.
    ///
    /// In lenient mode an id that matches no category is stored exactly as submitted.
    pub async fn resolve(
        &self,
        category: Option<Uuid>,
        sub_category: Option<Uuid>,
    ) -> Result<CategoryAssignment> {
        if let Some(sub_id) = sub_category {
            match self.lookup(sub_id).await? {
                Some(record) => match record.kind() {
                    CategoryKind::Sub { parent_id } => {
                        if let Some(requested) = category.filter(|c| *c != parent_id) {
                            tracing::warn!(
                                "Subcategory {} belongs to {}, overriding requested category {}",
                                sub_id,
                                parent_id,
                                requested
                            );
                        }
                        return self.attach_to_parent(parent_id, sub_id).await;
                    }
                    CategoryKind::TopLevel => match category {
                        None => return Ok(CategoryAssignment::top_level(sub_id)),
                        Some(c) if c == sub_id => return Ok(CategoryAssignment::top_level(sub_id)),
                        Some(c) => {
                            if self.mode == ResolutionMode::Strict {
                                return Err(AppError::Validation(format!(
                                    "sub_category {} is a top-level category and does not belong to category {}",
                                    sub_id, c
                                )));
                            }
                            tracing::warn!(
                                "Dropping top-level sub_category {} submitted with category {}",
                                sub_id,
                                c
                            );
                        }
                    },
                },
                None => {
                    if self.mode == ResolutionMode::Strict {
                        return Err(AppError::Validation(format!(
                            "Subcategory {} does not exist",
                            sub_id
                        )));
                    }
                    tracing::warn!("Unresolved sub_category {} stored as submitted", sub_id);
                    let base = match category {
                        Some(category_id) => self.resolve_category(category_id).await?,
                        None => CategoryAssignment::default(),
                    };
                    return Ok(CategoryAssignment {
                        category_id: base.category_id,
                        sub_category_id: Some(sub_id),
                    });
                }
            }
        }

        let Some(category_id) = category else {
            if self.mode == ResolutionMode::Strict {
                return Err(AppError::Validation("category is required".to_string()));
            }
            return Ok(CategoryAssignment::default());
        };

        self.resolve_category(category_id).await
    }

    async fn resolve_category(&self, category_id: Uuid) -> Result<CategoryAssignment> {
        match self.lookup(category_id).await? {
            Some(record) => match record.kind() {
                // A subcategory id passed as category
                CategoryKind::Sub { parent_id } => {
                    self.attach_to_parent(parent_id, category_id).await
                }
                CategoryKind::TopLevel => Ok(CategoryAssignment::top_level(category_id)),
            },
            None => {
                if self.mode == ResolutionMode::Strict {
                    return Err(AppError::Validation(format!(
                        "Category {} does not exist",
                        category_id
                    )));
                }
                tracing::warn!("Unresolved category {} stored as submitted", category_id);
                Ok(CategoryAssignment::top_level(category_id))
            }
        }
    }

    /// Pair a subcategory with its parent. Strict mode requires the parent to still exist as a
    /// top-level category.
    async fn attach_to_parent(&self, parent_id: Uuid, sub_id: Uuid) -> Result<CategoryAssignment> {
        if self.mode == ResolutionMode::Strict {
            let parent = self.lookup(parent_id).await?;
            if !matches!(parent, Some(ref p) if p.is_top_level()) {
                return Err(AppError::Validation(format!(
                    "Subcategory {} belongs to category {}, which no longer exists",
                    sub_id, parent_id
                )));
            }
        }
        Ok(CategoryAssignment::with_sub(parent_id, sub_id))
    }

    async fn lookup(&self, id: Uuid) -> Result<Option<Category>> {
        self.categories.get_by_id(id).await
    }
}
