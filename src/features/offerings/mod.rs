//! Services the business offers, shown on the storefront's services page.
//!
//! The HTTP resource is named `services`; the Rust module is `offerings` to keep it apart from
//! the service layer.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET/POST | `/api/services` | List / create services |
//! | GET/PUT/DELETE | `/api/services/{id}` | Single service |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{OfferingRepository, PgOfferingRepository};
pub use services::OfferingService;
