use uuid::Uuid;

use crate::features::categories::models::NewCategory;
use crate::features::categories::CategoryRepository;

/// Insert a category directly into a repository, bypassing service checks
pub async fn seed_category(
    repo: &dyn CategoryRepository,
    name: &str,
    parent_id: Option<Uuid>,
) -> Uuid {
    repo.create(NewCategory {
        name: name.to_string(),
        description: None,
        image: None,
        parent_id,
    })
    .await
    .unwrap()
    .id
}
