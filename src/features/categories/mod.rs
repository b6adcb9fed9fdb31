//! Category hierarchy: top-level categories and their subcategories.
//!
//! Both live in one table; a category with a `parent_id` is a subcategory. The hierarchy is
//! at most two levels deep and is never cascaded on delete.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/categories` | List categories (`?tree=true` for nested) |
//! | GET | `/api/categories/nested` | Top-level categories with children |
//! | GET/PUT/DELETE | `/api/categories/{id}` | Single category |
//! | POST | `/api/categories` | Create category |
//! | GET/POST | `/api/subcategories` | List / create subcategories |
//! | GET | `/api/subcategories/nested?parent_id=` | Children of one parent |
//! | GET/PUT/DELETE | `/api/subcategories/{id}` | Single subcategory |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{CategoryRepository, PgCategoryRepository};
pub use services::CategoryService;
