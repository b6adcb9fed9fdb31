//! Supplier applications submitted from the storefront's "become a supplier" form.
//!
//! The inbox is append-only: applications are created and read, never edited. The brochure is
//! a URL returned by the upload endpoint.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET/POST | `/api/suppliers` | List / submit applications |
//! | GET | `/api/suppliers/{id}` | Single application |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{PgSupplierRepository, SupplierRepository};
pub use services::SupplierService;
