//! # boothdesk-api
//!
//! HTTP API layer for BoothDesk. Routes, handlers, DTOs, extractors, and
//! middleware live here; business rules live in `boothdesk-service` and
//! `boothdesk-auth`.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use state::AppState;
