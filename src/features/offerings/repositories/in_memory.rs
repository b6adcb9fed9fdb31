use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::offerings::models::{NewOffering, Offering, OfferingChanges};
use crate::features::offerings::repositories::OfferingRepository;

#[derive(Default)]
pub struct InMemoryOfferingRepository {
    offerings: RwLock<Vec<Offering>>,
}

impl InMemoryOfferingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OfferingRepository for InMemoryOfferingRepository {
    async fn list(&self) -> Result<Vec<Offering>> {
        Ok(self.offerings.read().await.iter().rev().cloned().collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Offering>> {
        Ok(self
            .offerings
            .read()
            .await
            .iter()
            .find(|o| o.id == id)
            .cloned())
    }

    async fn create(&self, new: NewOffering) -> Result<Offering> {
        let now = Utc::now();
        let offering = Offering {
            id: Uuid::now_v7(),
            title: new.title,
            description: new.description,
            featured_image: new.featured_image,
            created_at: now,
            updated_at: now,
        };
        self.offerings.write().await.push(offering.clone());
        Ok(offering)
    }

    async fn update(&self, id: Uuid, changes: OfferingChanges) -> Result<Option<Offering>> {
        let mut offerings = self.offerings.write().await;
        let Some(offering) = offerings.iter_mut().find(|o| o.id == id) else {
            return Ok(None);
        };
        changes.apply_to(offering);
        offering.updated_at = Utc::now();
        Ok(Some(offering.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut offerings = self.offerings.write().await;
        let before = offerings.len();
        offerings.retain(|o| o.id != id);
        Ok(offerings.len() < before)
    }
}
