//! Customer quote requests.
//!
//! Storefront visitors submit quotes; the admin dashboard lists them and moves each one through
//! `pending`, `in_progress`, `completed` or `rejected`.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/quotes` | List quotes, newest first |
//! | POST | `/api/quotes` | Submit a quote request |
//! | PUT | `/api/quotes/{id}/status` | Change status |
//! | PATCH | `/api/quotes/{id}` | Change status (dashboard form) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{PgQuoteRepository, QuoteRepository};
pub use services::QuoteService;
