//! Custom Axum extractors.

pub mod auth;
pub mod pagination;

pub use auth::{AdminUser, AuthUser, BearerToken};
pub use pagination::Pagination;
