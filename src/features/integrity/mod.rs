//! Read-only scan for dangling catalog references.
//!
//! Deletes never cascade and the tables carry no foreign keys, so subcategories and products can
//! outlive the records they point at. This report lists them; nothing is repaired.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/catalog/integrity` | Integrity report |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::IntegrityService;
