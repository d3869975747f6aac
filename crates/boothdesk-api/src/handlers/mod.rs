//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod booth;
pub mod dashboard;
pub mod health;
pub mod kizhai;
pub mod member;
pub mod sessions;
pub mod users;
