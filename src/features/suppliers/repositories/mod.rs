mod supplier_repository;
#[cfg(test)]
mod in_memory;

pub use supplier_repository::{PgSupplierRepository, SupplierRepository};
#[cfg(test)]
pub use in_memory::InMemorySupplierRepository;
