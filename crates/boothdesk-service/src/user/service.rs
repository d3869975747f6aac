//! Self-service user operations — registration and profile lookup.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use boothdesk_auth::password::{PasswordHasher, PasswordPolicy};
use boothdesk_core::error::AppError;
use boothdesk_core::result::AppResult;
use boothdesk_database::repositories::UserRepository;
use boothdesk_entity::user::{CreateUser, User, UserRole};

/// Handles registration and profile lookup.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    users: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password strength policy.
    policy: Arc<PasswordPolicy>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        policy: Arc<PasswordPolicy>,
    ) -> Self {
        Self {
            users,
            hasher,
            policy,
        }
    }

    /// Registers a new user in the pending state.
    ///
    /// The account cannot log in until an admin approves it. Email is the
    /// unique handle; a duplicate registration is a conflict.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> AppResult<User> {
        let name = name.trim();
        let email = email.trim().to_lowercase();

        if name.is_empty() {
            return Err(AppError::validation("Name cannot be empty"));
        }
        if !email.contains('@') || !email.contains('.') {
            return Err(AppError::validation("Invalid email format"));
        }

        self.policy.check(password, &[name, &email])?;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("Email is already registered"));
        }

        let password_hash = self.hasher.hash(password)?;
        let user = self
            .users
            .create(&CreateUser {
                name: name.to_string(),
                email,
                password_hash,
                role,
            })
            .await?;

        info!(user_id = %user.id, role = %user.role, "user registered, awaiting approval");
        Ok(user)
    }

    /// Loads a user's full profile by id.
    pub async fn get_profile(&self, user_id: Uuid) -> AppResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
