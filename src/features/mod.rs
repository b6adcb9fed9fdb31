pub mod blogs;
pub mod brands;
pub mod categories;
pub mod integrity;
pub mod offerings;
pub mod products;
pub mod quotes;
pub mod suppliers;
