//! # boothdesk-entity
//!
//! Domain entity models for BoothDesk. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod booth;
pub mod kizhai;
pub mod member;
pub mod session;
pub mod user;
