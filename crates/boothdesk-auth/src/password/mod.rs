//! Password hashing and strength policy.

pub mod hasher;
pub mod validator;

pub use hasher::PasswordHasher;
pub use validator::PasswordPolicy;
