//! # boothdesk-auth
//!
//! Authentication and session management for BoothDesk.
//!
//! ## Modules
//!
//! - `jwt` — token issuance and verification (HS256, fixed expiry)
//! - `password` — Argon2id password hashing and policy enforcement
//! - `session` — the Session Authority, login/termination lifecycle, and
//!   best-effort geolocation
//! - `rbac` — role gate over the closed, totally ordered role set

pub mod jwt;
pub mod password;
pub mod rbac;
pub mod session;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordPolicy};
pub use rbac::RoleGate;
pub use session::{AuthenticatedIdentity, GeoLocator, LoginResult, SessionAuthority, SessionManager};
