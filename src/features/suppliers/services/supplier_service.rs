use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::suppliers::dtos::{CreateSupplierDto, SupplierResponseDto};
use crate::features::suppliers::models::{NewSupplier, SupplierAddress};
use crate::features::suppliers::repositories::SupplierRepository;
use crate::shared::text::normalize_text;

fn trimmed(value: String) -> String {
    value.trim().to_string()
}

/// Service for the supplier application inbox
pub struct SupplierService {
    repo: Arc<dyn SupplierRepository>,
}

impl SupplierService {
    pub fn new(repo: Arc<dyn SupplierRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, dto: CreateSupplierDto) -> Result<SupplierResponseDto> {
        let address = SupplierAddress {
            street: trimmed(dto.address.street),
            city: trimmed(dto.address.city),
            zip: trimmed(dto.address.zip),
            country: trimmed(dto.address.country),
        };

        let supplier = self
            .repo
            .create(NewSupplier {
                first_name: trimmed(dto.first_name),
                last_name: trimmed(dto.last_name),
                email: trimmed(dto.email),
                phone: trimmed(dto.phone),
                company_name: trimmed(dto.company_name),
                job_title: trimmed(dto.job_title),
                address,
                ingredients_supplied: dto.ingredients_supplied,
                food_safety_accreditations: dto.food_safety_accreditations,
                brochure: normalize_text(dto.brochure),
                website: normalize_text(dto.website),
                message: normalize_text(dto.message),
                newsletter_subscribed: dto.newsletter_subscribed,
            })
            .await?;

        tracing::info!(
            "Supplier request created: id={}, company={}",
            supplier.id,
            supplier.company_name
        );
        Ok(supplier.into())
    }

    pub async fn list(&self) -> Result<Vec<SupplierResponseDto>> {
        let suppliers = self.repo.list().await?;
        Ok(suppliers.into_iter().map(|s| s.into()).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<SupplierResponseDto> {
        self.repo
            .get_by_id(id)
            .await?
            .map(|s| s.into())
            .ok_or_else(|| AppError::NotFound("Supplier request not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::suppliers::dtos::SupplierAddressDto;
    use crate::features::suppliers::repositories::InMemorySupplierRepository;
    use fake::faker::company::en::CompanyName;
    use fake::faker::internet::en::SafeEmail;
    use fake::Fake;

    fn service() -> SupplierService {
        SupplierService::new(Arc::new(InMemorySupplierRepository::new()))
    }

    fn application() -> CreateSupplierDto {
        CreateSupplierDto {
            first_name: " Ravi ".to_string(),
            last_name: "Menon".to_string(),
            email: SafeEmail().fake(),
            phone: "+91 484 223 4455".to_string(),
            company_name: CompanyName().fake(),
            job_title: "Export Manager".to_string(),
            address: SupplierAddressDto {
                street: "12 Jew Town Road".to_string(),
                city: "Kochi ".to_string(),
                zip: "682002".to_string(),
                country: "India".to_string(),
            },
            ingredients_supplied: "Black pepper, cardamom".to_string(),
            food_safety_accreditations: "FSSC 22000".to_string(),
            brochure: Some("https://cdn.example.com/brochures/malabar.pdf".to_string()),
            website: None,
            message: Some("  ".to_string()),
            newsletter_subscribed: true,
        }
    }

    #[tokio::test]
    async fn test_submitted_application_can_be_read_back() {
        let service = service();
        let created = service.create(application()).await.unwrap();

        assert_eq!(created.first_name, "Ravi");
        assert_eq!(created.address.city, "Kochi");
        assert_eq!(created.message, None);
        assert!(created.newsletter_subscribed);

        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let service = service();
        let first = service.create(application()).await.unwrap();
        let second = service.create(application()).await.unwrap();

        let ids: Vec<Uuid> = service.list().await.unwrap().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[tokio::test]
    async fn test_unknown_application_is_not_found() {
        let err = service().get(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
