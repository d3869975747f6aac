//! Core type definitions used across the BoothDesk workspace.

pub mod pagination;

pub use pagination::{PageRequest, PageResponse};
