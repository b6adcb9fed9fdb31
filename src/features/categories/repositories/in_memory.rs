use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, CategoryChanges, NewCategory};
use crate::features::categories::repositories::CategoryRepository;

/// Vec-backed repository for tests; enforces the same unique-name rule as the table
#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: RwLock<Vec<Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn duplicate_name() -> AppError {
        AppError::BadRequest("Category with this name already exists".to_string())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>> {
        Ok(self.categories.read().await.iter().rev().cloned().collect())
    }

    async fn list_subcategories(&self) -> Result<Vec<Category>> {
        Ok(self
            .categories
            .read()
            .await
            .iter()
            .rev()
            .filter(|c| c.parent_id.is_some())
            .cloned()
            .collect())
    }

    async fn list_children(&self, parent_id: Uuid) -> Result<Vec<Category>> {
        Ok(self
            .categories
            .read()
            .await
            .iter()
            .rev()
            .filter(|c| c.parent_id == Some(parent_id))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Category>> {
        Ok(self
            .categories
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn create(&self, new: NewCategory) -> Result<Category> {
        let mut categories = self.categories.write().await;
        if categories.iter().any(|c| c.name == new.name) {
            return Err(Self::duplicate_name());
        }

        let now = Utc::now();
        let category = Category {
            id: Uuid::now_v7(),
            parent_id: new.parent_id,
            name: new.name,
            description: new.description,
            image: new.image,
            created_at: now,
            updated_at: now,
        };
        categories.push(category.clone());
        Ok(category)
    }

    async fn update(&self, id: Uuid, changes: CategoryChanges) -> Result<Option<Category>> {
        let mut categories = self.categories.write().await;
        if let Some(name) = &changes.name {
            if categories.iter().any(|c| c.id != id && &c.name == name) {
                return Err(Self::duplicate_name());
            }
        }

        let Some(category) = categories.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        changes.apply_to(category);
        category.updated_at = Utc::now();
        Ok(Some(category.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut categories = self.categories.write().await;
        let before = categories.len();
        categories.retain(|c| c.id != id);
        Ok(categories.len() < before)
    }
}
