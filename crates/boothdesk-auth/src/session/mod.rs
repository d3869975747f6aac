//! Session lifecycle: login, verification against the ledger, termination.

pub mod authority;
pub mod geo;
pub mod manager;

pub use authority::{AuthenticatedIdentity, SessionAuthority};
pub use geo::GeoLocator;
pub use manager::{LoginResult, SessionManager};
