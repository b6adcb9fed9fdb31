mod brand_repository;
#[cfg(test)]
mod in_memory;

pub use brand_repository::{BrandRepository, PgBrandRepository};
#[cfg(test)]
pub use in_memory::InMemoryBrandRepository;
