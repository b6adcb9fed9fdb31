use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::brands::models::{Brand, BrandChanges, NewBrand};
use crate::features::brands::repositories::BrandRepository;

/// Vec-backed repository for tests; names are unique as in the table
#[derive(Default)]
pub struct InMemoryBrandRepository {
    brands: RwLock<Vec<Brand>>,
}

impl InMemoryBrandRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn duplicate_name() -> AppError {
        AppError::BadRequest("Brand with this name already exists".to_string())
    }
}

#[async_trait]
impl BrandRepository for InMemoryBrandRepository {
    async fn list(&self) -> Result<Vec<Brand>> {
        Ok(self.brands.read().await.iter().rev().cloned().collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Brand>> {
        Ok(self.brands.read().await.iter().find(|b| b.id == id).cloned())
    }

    async fn create(&self, new: NewBrand) -> Result<Brand> {
        let mut brands = self.brands.write().await;
        if brands.iter().any(|b| b.name == new.name) {
            return Err(Self::duplicate_name());
        }

        let now = Utc::now();
        let brand = Brand {
            id: Uuid::now_v7(),
            name: new.name,
            description: new.description,
            image: new.image,
            created_at: now,
            updated_at: now,
        };
        brands.push(brand.clone());
        Ok(brand)
    }

    async fn update(&self, id: Uuid, changes: BrandChanges) -> Result<Option<Brand>> {
        let mut brands = self.brands.write().await;
        if let Some(name) = &changes.name {
            if brands.iter().any(|b| b.id != id && &b.name == name) {
                return Err(Self::duplicate_name());
            }
        }

        let Some(brand) = brands.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        changes.apply_to(brand);
        brand.updated_at = Utc::now();
        Ok(Some(brand.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut brands = self.brands.write().await;
        let before = brands.len();
        brands.retain(|b| b.id != id);
        Ok(brands.len() < before)
    }
}
