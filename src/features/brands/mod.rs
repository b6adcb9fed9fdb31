//! Brands that products can reference.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET/POST | `/api/brands` | List / create brands |
//! | GET/PUT/DELETE | `/api/brands/{id}` | Single brand |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{BrandRepository, PgBrandRepository};
pub use services::BrandService;
