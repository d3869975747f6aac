//! User registration and admin approval workflow.

pub mod admin;
pub mod service;

pub use admin::AdminUserService;
pub use service::UserService;
