//! Role-based access gate.

use boothdesk_core::error::AppError;
use boothdesk_core::result::AppResult;
use boothdesk_entity::user::UserRole;

/// Gate over the closed, totally ordered role set.
///
/// Admin outranks Organizer outranks Volunteer; a higher role can do
/// everything a lower role can.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleGate;

impl RoleGate {
    /// Requires the actor to hold at least the given role.
    pub fn require_at_least(actor: UserRole, required: UserRole) -> AppResult<()> {
        if actor.has_at_least(required) {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "Requires {} privileges or higher",
                required.as_str()
            )))
        }
    }

    /// Requires the actor to be an admin.
    pub fn require_admin(actor: UserRole) -> AppResult<()> {
        Self::require_at_least(actor, UserRole::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_roles_pass_lower_requirements() {
        assert!(RoleGate::require_at_least(UserRole::Admin, UserRole::Volunteer).is_ok());
        assert!(RoleGate::require_at_least(UserRole::Organizer, UserRole::Volunteer).is_ok());
        assert!(RoleGate::require_at_least(UserRole::Admin, UserRole::Organizer).is_ok());
    }

    #[test]
    fn lower_roles_fail_higher_requirements() {
        let err = RoleGate::require_at_least(UserRole::Volunteer, UserRole::Organizer).unwrap_err();
        assert_eq!(err.kind, boothdesk_core::error::ErrorKind::Authorization);
        assert!(RoleGate::require_admin(UserRole::Organizer).is_err());
    }

    #[test]
    fn exact_role_passes() {
        assert!(RoleGate::require_at_least(UserRole::Volunteer, UserRole::Volunteer).is_ok());
        assert!(RoleGate::require_admin(UserRole::Admin).is_ok());
    }
}
