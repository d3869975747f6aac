//! Session ledger entities.

pub mod device;
pub mod geo;
pub mod model;

pub use device::DeviceInfo;
pub use geo::GeoLocation;
pub use model::{CreateSession, Presence, Session};
