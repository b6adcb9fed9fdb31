mod offering_repository;
#[cfg(test)]
mod in_memory;

pub use offering_repository::{OfferingRepository, PgOfferingRepository};
#[cfg(test)]
pub use in_memory::InMemoryOfferingRepository;
