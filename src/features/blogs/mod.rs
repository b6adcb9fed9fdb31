//! Blog posts for the storefront.
//!
//! Each post gets a URL slug derived from its title. The slug is unique and is regenerated when
//! the title changes. Content is stored as submitted; rendering is left to the storefront.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET/POST | `/api/blogs` | List / create posts |
//! | GET | `/api/blogs/{slug}` | Post by slug |
//! | GET | `/api/blogs/id/{id}` | Post by id |
//! | PUT/DELETE | `/api/blogs/{id}` | Update / delete by id |
//! | POST | `/api/blogs/verify` | Check whether a title or slug is taken |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{BlogRepository, PgBlogRepository};
pub use services::BlogService;
