//! # boothdesk-service
//!
//! Business logic service layer for BoothDesk. Each service orchestrates
//! repositories and authentication components to implement application-level
//! use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod dashboard;
pub mod roster;
pub mod session;
pub mod user;

pub use context::RequestContext;
pub use dashboard::DashboardService;
pub use roster::{BoothService, KizhaiService, MemberService};
pub use session::SessionService;
pub use user::{AdminUserService, UserService};
