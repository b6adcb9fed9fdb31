use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::products::models::{NewProduct, Product, ProductChanges, ProductFilter};
use crate::features::products::repositories::ProductRepository;

/// Vec-backed repository for tests
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> Result<Vec<Product>> {
        Ok(self.products.read().await.iter().rev().cloned().collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Product>> {
        Ok(self
            .products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn create(&self, new: NewProduct) -> Result<Product> {
        let now = Utc::now();
        let product = Product {
            id: Uuid::now_v7(),
            title: new.title,
            description: new.description,
            featured_image: new.featured_image,
            gallery: new.gallery,
            brand_id: new.brand_id,
            category_id: new.assignment.category_id,
            sub_category_id: new.assignment.sub_category_id,
            created_at: now,
            updated_at: now,
        };
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: Uuid, changes: ProductChanges) -> Result<Option<Product>> {
        let mut products = self.products.write().await;
        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        changes.apply_to(product);
        product.updated_at = Utc::now();
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() < before)
    }

    async fn query(&self, filter: ProductFilter) -> Result<Vec<Product>> {
        Ok(self
            .products
            .read()
            .await
            .iter()
            .rev()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }
}
