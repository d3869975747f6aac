//! Admin session views over the ledger.

pub mod service;

pub use service::{SessionService, SessionSummary};
