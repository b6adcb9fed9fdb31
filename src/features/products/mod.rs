//! Products and their category assignment.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET/POST | `/api/products` | List / create products |
//! | GET/PUT/DELETE | `/api/products/{id}` | Single product |
//! | GET | `/api/products/category/{category_id}` | Products stored under a category |
//! | GET | `/api/products/subcategory/{sub_category_id}` | Products stored under a subcategory |
//! | GET | `/api/products/query?category=&sub_category=` | Combined filter |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod resolver;
pub mod routes;
pub mod services;

pub use repositories::{PgProductRepository, ProductRepository};
pub use resolver::CategoryResolver;
pub use services::ProductService;
