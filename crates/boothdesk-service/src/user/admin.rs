//! Admin operations over the registration approval queue.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use boothdesk_core::error::AppError;
use boothdesk_core::result::AppResult;
use boothdesk_database::repositories::UserRepository;
use boothdesk_entity::user::User;

use crate::context::RequestContext;

/// Admin-only user management: the approval queue.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    users: Arc<UserRepository>,
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(users: Arc<UserRepository>) -> Self {
        Self { users }
    }

    /// Lists users awaiting approval, oldest registration first.
    pub async fn list_pending(&self) -> AppResult<Vec<User>> {
        self.users.find_pending().await
    }

    /// Approves a pending registration. Approving an already-approved user
    /// is a no-op success.
    pub async fn approve(&self, ctx: &RequestContext, user_id: Uuid) -> AppResult<User> {
        let user = self
            .users
            .approve(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(admin_id = %ctx.user_id, user_id = %user.id, "user approved");
        Ok(user)
    }

    /// Rejects a pending registration by deleting the row.
    ///
    /// Approved accounts cannot be rejected — that would silently destroy a
    /// live account and its sessions.
    pub async fn reject(&self, ctx: &RequestContext, user_id: Uuid) -> AppResult<()> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if user.is_approved {
            return Err(AppError::conflict(
                "Cannot reject an already-approved account",
            ));
        }

        self.users.delete(user_id).await?;
        info!(admin_id = %ctx.user_id, %user_id, "pending registration rejected");
        Ok(())
    }
}
