mod quote_repository;
#[cfg(test)]
mod in_memory;

pub use quote_repository::{PgQuoteRepository, QuoteRepository};
#[cfg(test)]
pub use in_memory::InMemoryQuoteRepository;
