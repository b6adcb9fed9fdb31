use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::suppliers::models::{NewSupplier, Supplier};
use crate::features::suppliers::repositories::SupplierRepository;

#[derive(Default)]
pub struct InMemorySupplierRepository {
    suppliers: RwLock<Vec<Supplier>>,
}

impl InMemorySupplierRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SupplierRepository for InMemorySupplierRepository {
    async fn list(&self) -> Result<Vec<Supplier>> {
        Ok(self.suppliers.read().await.iter().rev().cloned().collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Supplier>> {
        Ok(self
            .suppliers
            .read()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn create(&self, new: NewSupplier) -> Result<Supplier> {
        let supplier = Supplier {
            id: Uuid::now_v7(),
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            company_name: new.company_name,
            job_title: new.job_title,
            address: new.address,
            ingredients_supplied: new.ingredients_supplied,
            food_safety_accreditations: new.food_safety_accreditations,
            brochure: new.brochure,
            website: new.website,
            message: new.message,
            newsletter_subscribed: new.newsletter_subscribed,
            created_at: Utc::now(),
        };
        self.suppliers.write().await.push(supplier.clone());
        Ok(supplier)
    }
}
