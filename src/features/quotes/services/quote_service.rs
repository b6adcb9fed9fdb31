use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::quotes::dtos::{CreateQuoteDto, QuoteResponseDto};
use crate::features::quotes::models::{NewQuote, QuoteStatus};
use crate::features::quotes::repositories::QuoteRepository;
use crate::shared::text::normalize_text;

/// Service for the quote inbox
pub struct QuoteService {
    repo: Arc<dyn QuoteRepository>,
}

impl QuoteService {
    pub fn new(repo: Arc<dyn QuoteRepository>) -> Self {
        Self { repo }
    }

    /// New quotes always start as `pending`
    pub async fn create(&self, dto: CreateQuoteDto) -> Result<QuoteResponseDto> {
        let quote = self
            .repo
            .create(NewQuote {
                name: dto.name.trim().to_string(),
                email: dto.email.trim().to_string(),
                phone: dto.phone.trim().to_string(),
                details: dto.details.trim().to_string(),
                image: normalize_text(dto.image),
            })
            .await?;

        tracing::info!("Quote created: id={}, email={}", quote.id, quote.email);
        Ok(quote.into())
    }

    pub async fn list(&self) -> Result<Vec<QuoteResponseDto>> {
        let quotes = self.repo.list().await?;
        Ok(quotes.into_iter().map(|q| q.into()).collect())
    }

    pub async fn update_status(&self, id: Uuid, status: QuoteStatus) -> Result<QuoteResponseDto> {
        let quote = self
            .repo
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Quote not found".to_string()))?;

        tracing::info!("Quote {} moved to {}", quote.id, quote.status);
        Ok(quote.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::quotes::repositories::InMemoryQuoteRepository;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn service() -> QuoteService {
        QuoteService::new(Arc::new(InMemoryQuoteRepository::new()))
    }

    fn quote() -> CreateQuoteDto {
        CreateQuoteDto {
            name: Name().fake(),
            email: SafeEmail().fake(),
            phone: "+91 98450 12345".to_string(),
            details: "50kg of turmeric, monthly".to_string(),
            image: Some(" ".to_string()),
        }
    }

    #[tokio::test]
    async fn test_new_quote_is_pending() {
        let service = service();
        let created = service.create(quote()).await.unwrap();

        assert_eq!(created.status, QuoteStatus::Pending);
        assert_eq!(created.image, None);

        let listed = service.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].status, QuoteStatus::Pending);
    }

    #[tokio::test]
    async fn test_status_moves_through_inbox() {
        let service = service();
        let created = service.create(quote()).await.unwrap();

        let updated = service
            .update_status(created.id, QuoteStatus::InProgress)
            .await
            .unwrap();
        assert_eq!(updated.status, QuoteStatus::InProgress);
        assert_eq!(updated.email, created.email);

        let listed = service.list().await.unwrap();
        assert_eq!(listed[0].status, QuoteStatus::InProgress);
    }

    #[tokio::test]
    async fn test_updating_missing_quote_is_not_found() {
        let service = service();
        let err = service
            .update_status(Uuid::new_v4(), QuoteStatus::Completed)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
