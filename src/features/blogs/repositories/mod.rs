mod blog_repository;
#[cfg(test)]
mod in_memory;

pub use blog_repository::{BlogRepository, PgBlogRepository};
#[cfg(test)]
pub use in_memory::InMemoryBlogRepository;
