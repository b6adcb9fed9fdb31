use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::Result;
use crate::features::categories::models::Category;
use crate::features::categories::CategoryRepository;
use crate::features::integrity::dtos::{IntegrityIssue, IntegrityReportDto};
use crate::features::products::models::Product;
use crate::features::products::ProductRepository;

/// Find every reference that the current category set cannot satisfy
fn scan(categories: &[Category], products: &[Product]) -> Vec<IntegrityIssue> {
    let by_id: HashMap<Uuid, &Category> = categories.iter().map(|c| (c.id, c)).collect();
    let mut issues = Vec::new();

    for category in categories {
        if let Some(parent_id) = category.parent_id {
            if !by_id.contains_key(&parent_id) {
                issues.push(IntegrityIssue::OrphanedSubcategory {
                    category_id: category.id,
                    parent_id,
                });
            }
        }
    }

    for product in products {
        let assignment = product.assignment();
        let category = assignment.category_id.and_then(|id| by_id.get(&id));
        let sub = assignment.sub_category_id.and_then(|id| by_id.get(&id));

        if category.is_none() {
            issues.push(IntegrityIssue::MissingCategory {
                product_id: product.id,
                category_id: assignment.category_id,
            });
        }
        if let (Some(sub_id), None) = (assignment.sub_category_id, sub) {
            issues.push(IntegrityIssue::MissingSubcategory {
                product_id: product.id,
                sub_category_id: sub_id,
            });
        }

        let Some(category) = category else {
            continue;
        };
        let mismatched = !category.is_top_level()
            || sub.is_some_and(|s| s.parent_id != Some(category.id));
        if mismatched {
            issues.push(IntegrityIssue::MismatchedAssignment {
                product_id: product.id,
                category_id: category.id,
                sub_category_id: assignment.sub_category_id,
            });
        }
    }

    issues
}

/// Service for the catalog integrity report
pub struct IntegrityService {
    categories: Arc<dyn CategoryRepository>,
    products: Arc<dyn ProductRepository>,
}

impl IntegrityService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            categories,
            products,
        }
    }

    pub async fn report(&self) -> Result<IntegrityReportDto> {
        let categories = self.categories.list().await?;
        let products = self.products.list().await?;
        let issues = scan(&categories, &products);

        if !issues.is_empty() {
            tracing::warn!("Catalog integrity scan found {} issue(s)", issues.len());
        }

        Ok(IntegrityReportDto {
            categories_checked: categories.len(),
            products_checked: products.len(),
            issues,
        })
    }
}
