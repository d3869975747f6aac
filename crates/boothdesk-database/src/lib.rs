//! # boothdesk-database
//!
//! PostgreSQL connection management, migrations, and repository
//! implementations for BoothDesk.

pub mod connection;
pub mod migration;
pub mod repositories;
