use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryResponseDto, CategoryTreeDto, CreateCategoryDto, CreateSubcategoryDto,
    SubcategoryResponseDto, UpdateCategoryDto, UpdateSubcategoryDto,
};
use crate::features::categories::models::{Category, CategoryChanges, NewCategory};
use crate::features::categories::repositories::CategoryRepository;
use crate::shared::text::{normalize_patch, normalize_text};

/// Service for category and subcategory operations
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    /// List all categories (flat list)
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.repo.list().await?;
        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// List top-level categories with their children
    pub async fn list_tree(&self) -> Result<Vec<CategoryTreeDto>> {
        let categories = self.repo.list().await?;
        Ok(CategoryTreeDto::build_tree(&categories))
    }

    pub async fn get(&self, id: Uuid) -> Result<CategoryResponseDto> {
        self.find(id).await.map(|c| c.into())
    }

    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        if let Some(parent_id) = dto.parent_id {
            self.ensure_valid_parent(None, parent_id).await?;
        }

        let category = self
            .repo
            .create(NewCategory {
                name: dto.name.trim().to_string(),
                description: normalize_text(dto.description),
                image: normalize_text(dto.image),
                parent_id: dto.parent_id,
            })
            .await?;

        tracing::info!(
            "Category created: id={}, name={}, parent={:?}",
            category.id,
            category.name,
            category.parent_id
        );

        Ok(category.into())
    }

    pub async fn update(&self, id: Uuid, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        if let Some(Some(parent_id)) = dto.parent_id {
            self.ensure_valid_parent(Some(id), parent_id).await?;
        }

        let changes = CategoryChanges {
            name: dto.name.map(|n| n.trim().to_string()),
            description: normalize_patch(dto.description),
            image: normalize_patch(dto.image),
            parent_id: dto.parent_id,
        };

        let category = self
            .repo
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;

        tracing::info!("Category updated: id={}", category.id);
        Ok(category.into())
    }

    /// Delete a category; children and products referencing it are left as they are
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }

        tracing::info!("Category deleted: id={}", id);
        Ok(())
    }

    /// List every subcategory with its parent populated
    pub async fn list_subcategories(&self) -> Result<Vec<SubcategoryResponseDto>> {
        let subs = self.repo.list_subcategories().await?;

        let mut parents: HashMap<Uuid, Option<Category>> = HashMap::new();
        for parent_id in subs.iter().filter_map(|c| c.parent_id) {
            if !parents.contains_key(&parent_id) {
                let parent = self.repo.get_by_id(parent_id).await?;
                parents.insert(parent_id, parent);
            }
        }

        Ok(subs
            .into_iter()
            .filter_map(|c| {
                let parent = c.parent_id.and_then(|p| parents.get(&p).cloned().flatten());
                SubcategoryResponseDto::from_parts(c, parent)
            })
            .collect())
    }

    /// Direct children of a parent category, each with its own subtree
    pub async fn list_children(&self, parent_id: Uuid) -> Result<Vec<CategoryTreeDto>> {
        let children = self.repo.list_children(parent_id).await?;
        if children.is_empty() {
            return Ok(Vec::new());
        }

        let all = self.repo.list().await?;
        Ok(children
            .iter()
            .map(|child| CategoryTreeDto::build_node(child, &all))
            .collect())
    }

    pub async fn get_subcategory(&self, id: Uuid) -> Result<SubcategoryResponseDto> {
        let category = self.find_subcategory(id).await?;
        self.with_parent(category).await
    }

    pub async fn create_subcategory(
        &self,
        dto: CreateSubcategoryDto,
    ) -> Result<SubcategoryResponseDto> {
        let parent_id = dto.parent_id.ok_or_else(Self::parent_required)?;

        let created = self
            .create(CreateCategoryDto {
                name: dto.name,
                description: dto.description,
                image: dto.image,
                parent_id: Some(parent_id),
            })
            .await?;

        self.get_subcategory(created.id).await
    }

    pub async fn update_subcategory(
        &self,
        id: Uuid,
        dto: UpdateSubcategoryDto,
    ) -> Result<SubcategoryResponseDto> {
        let parent_id = dto.parent_id.ok_or_else(Self::parent_required)?;
        self.find_subcategory(id).await?;

        self.update(
            id,
            UpdateCategoryDto {
                name: dto.name,
                description: dto.description,
                image: dto.image,
                parent_id: Some(Some(parent_id)),
            },
        )
        .await?;

        self.get_subcategory(id).await
    }

    pub async fn delete_subcategory(&self, id: Uuid) -> Result<()> {
        self.find_subcategory(id).await?;
        self.delete(id).await
    }

    async fn find(&self, id: Uuid) -> Result<Category> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    async fn find_subcategory(&self, id: Uuid) -> Result<Category> {
        self.repo
            .get_by_id(id)
            .await?
            .filter(|c| !c.is_top_level())
            .ok_or_else(|| AppError::NotFound(format!("Subcategory {} not found", id)))
    }

    async fn with_parent(&self, category: Category) -> Result<SubcategoryResponseDto> {
        let parent = match category.parent_id {
            Some(parent_id) => self.repo.get_by_id(parent_id).await?,
            None => None,
        };
        let id = category.id;
        SubcategoryResponseDto::from_parts(category, parent)
            .ok_or_else(|| AppError::NotFound(format!("Subcategory {} not found", id)))
    }

    fn parent_required() -> AppError {
        AppError::Validation("Parent category is required for subcategory.".to_string())
    }

    /// Hierarchy integrity: the parent exists, is top-level, and is not the category itself.
    /// A category that already has children cannot be moved under a parent.
    async fn ensure_valid_parent(&self, child_id: Option<Uuid>, parent_id: Uuid) -> Result<()> {
        if child_id == Some(parent_id) {
            return Err(AppError::Validation(
                "A category cannot be its own parent".to_string(),
            ));
        }

        let parent = self.repo.get_by_id(parent_id).await?.ok_or_else(|| {
            AppError::Validation(format!("Parent category {} does not exist", parent_id))
        })?;

        if !parent.is_top_level() {
            return Err(AppError::Validation(format!(
                "Parent category {} is itself a subcategory; only two levels are supported",
                parent_id
            )));
        }

        if let Some(child_id) = child_id {
            if !self.repo.list_children(child_id).await?.is_empty() {
                return Err(AppError::Validation(format!(
                    "Category {} has subcategories and cannot become a subcategory",
                    child_id
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::repositories::InMemoryCategoryRepository;

    fn service() -> CategoryService {
        CategoryService::new(Arc::new(InMemoryCategoryRepository::new()))
    }

    fn top_level(name: &str) -> CreateCategoryDto {
        CreateCategoryDto {
            name: name.to_string(),
            description: None,
            image: None,
            parent_id: None,
        }
    }

    fn sub(name: &str, parent_id: Uuid) -> CreateCategoryDto {
        CreateCategoryDto {
            parent_id: Some(parent_id),
            ..top_level(name)
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let service = service();
        let created = service
            .create(CreateCategoryDto {
                name: "Spices".to_string(),
                description: Some("Ground and whole spices".to_string()),
                image: Some("https://cdn.example.com/spices.png".to_string()),
                parent_id: None,
            })
            .await
            .unwrap();

        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Spices");
        assert_eq!(fetched.description.as_deref(), Some("Ground and whole spices"));
        assert_eq!(
            fetched.image.as_deref(),
            Some("https://cdn.example.com/spices.png")
        );
        assert_eq!(fetched.parent_id, None);
    }

    #[tokio::test]
    async fn test_duplicate_name_is_bad_request() {
        let service = service();
        service.create(top_level("Spices")).await.unwrap();

        let err = service.create(top_level("Spices")).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_parent_must_exist() {
        let service = service();
        let err = service
            .create(sub("Chili Powder", Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_depth_is_limited_to_two_levels() {
        let service = service();
        let spices = service.create(top_level("Spices")).await.unwrap();
        let chili = service.create(sub("Chili Powder", spices.id)).await.unwrap();

        let err = service
            .create(sub("Smoked Chili", chili.id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_cannot_parent_itself() {
        let service = service();
        let spices = service.create(top_level("Spices")).await.unwrap();

        let err = service
            .update(
                spices.id,
                UpdateCategoryDto {
                    parent_id: Some(Some(spices.id)),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_category_with_children_cannot_move_under_parent() {
        let service = service();
        let spices = service.create(top_level("Spices")).await.unwrap();
        let herbs = service.create(top_level("Herbs")).await.unwrap();
        service.create(sub("Chili Powder", spices.id)).await.unwrap();

        let err = service
            .update(
                spices.id,
                UpdateCategoryDto {
                    parent_id: Some(Some(herbs.id)),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_detaches_and_clears_fields() {
        let service = service();
        let spices = service.create(top_level("Spices")).await.unwrap();
        let chili = service
            .create(CreateCategoryDto {
                description: Some("Hot".to_string()),
                ..sub("Chili Powder", spices.id)
            })
            .await
            .unwrap();

        let updated = service
            .update(
                chili.id,
                UpdateCategoryDto {
                    description: Some(String::new()),
                    parent_id: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.parent_id, None);
        assert_eq!(updated.description, None);
        assert_eq!(updated.name, "Chili Powder");
    }

    #[tokio::test]
    async fn test_delete_parent_does_not_cascade() {
        let service = service();
        let spices = service.create(top_level("Spices")).await.unwrap();
        let chili = service.create(sub("Chili Powder", spices.id)).await.unwrap();

        service.delete(spices.id).await.unwrap();

        let orphan = service.get_subcategory(chili.id).await.unwrap();
        assert_eq!(orphan.parent_id, spices.id);
        assert!(orphan.parent.is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let service = service();
        let err = service.delete(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_subcategory_requires_parent() {
        let service = service();
        let err = service
            .create_subcategory(CreateSubcategoryDto {
                name: "Chili Powder".to_string(),
                description: None,
                image: None,
                parent_id: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_subcategory_endpoints_ignore_top_level() {
        let service = service();
        let spices = service.create(top_level("Spices")).await.unwrap();

        let err = service.get_subcategory(spices.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = service.delete_subcategory(spices.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(service.get(spices.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_subcategories_populates_parent() {
        let service = service();
        let spices = service.create(top_level("Spices")).await.unwrap();
        service.create(top_level("Herbs")).await.unwrap();
        let chili = service
            .create_subcategory(CreateSubcategoryDto {
                name: "Chili Powder".to_string(),
                description: None,
                image: None,
                parent_id: Some(spices.id),
            })
            .await
            .unwrap();

        let subs = service.list_subcategories().await.unwrap();
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].id, chili.id);
        assert_eq!(subs[0].parent.as_ref().map(|p| p.id), Some(spices.id));

        // Orphans stay listed without a parent
        let paprika = service.create(sub("Paprika", spices.id)).await.unwrap();
        let garlic = service.create(top_level("Garlic")).await.unwrap();
        let dried = service.create(sub("Dried Garlic", garlic.id)).await.unwrap();
        service.delete(garlic.id).await.unwrap();

        let subs = service.list_subcategories().await.unwrap();
        let ids: Vec<Uuid> = subs.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![dried.id, paprika.id, chili.id]);
        assert!(subs[0].parent.is_none());
        assert_eq!(subs[1].parent.as_ref().map(|p| p.id), Some(spices.id));

        let children = service.list_children(spices.id).await.unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].id, chili.id);
        assert!(children[0].children.is_empty());
    }

    #[tokio::test]
    async fn test_update_subcategory_moves_between_parents() {
        let service = service();
        let spices = service.create(top_level("Spices")).await.unwrap();
        let herbs = service.create(top_level("Herbs")).await.unwrap();
        let chili = service.create(sub("Chili Powder", spices.id)).await.unwrap();

        let moved = service
            .update_subcategory(
                chili.id,
                UpdateSubcategoryDto {
                    name: None,
                    description: None,
                    image: None,
                    parent_id: Some(herbs.id),
                },
            )
            .await
            .unwrap();

        assert_eq!(moved.parent_id, herbs.id);
        assert!(service.list_children(spices.id).await.unwrap().is_empty());
    }
}
