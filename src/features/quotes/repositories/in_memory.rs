use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::quotes::models::{NewQuote, Quote, QuoteStatus};
use crate::features::quotes::repositories::QuoteRepository;

/// Vec-backed repository for tests
#[derive(Default)]
pub struct InMemoryQuoteRepository {
    quotes: RwLock<Vec<Quote>>,
}

impl InMemoryQuoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuoteRepository for InMemoryQuoteRepository {
    async fn list(&self) -> Result<Vec<Quote>> {
        Ok(self.quotes.read().await.iter().rev().cloned().collect())
    }

    async fn create(&self, new: NewQuote) -> Result<Quote> {
        let now = Utc::now();
        let quote = Quote {
            id: Uuid::now_v7(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            details: new.details,
            image: new.image,
            status: QuoteStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        self.quotes.write().await.push(quote.clone());
        Ok(quote)
    }

    async fn update_status(&self, id: Uuid, status: QuoteStatus) -> Result<Option<Quote>> {
        let mut quotes = self.quotes.write().await;
        let Some(quote) = quotes.iter_mut().find(|q| q.id == id) else {
            return Ok(None);
        };
        quote.status = status;
        quote.updated_at = Utc::now();
        Ok(Some(quote.clone()))
    }
}
