mod product_repository;
#[cfg(test)]
mod in_memory;

pub use product_repository::{PgProductRepository, ProductRepository};
#[cfg(test)]
pub use in_memory::InMemoryProductRepository;
