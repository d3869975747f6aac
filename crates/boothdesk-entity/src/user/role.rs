//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the dashboard.
///
/// Roles are ordered by privilege level: Admin > Organizer > Volunteer.
/// Authorization is a comparison on this closed set only; there is no
/// string matching anywhere in the access path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full district administrator.
    Admin,
    /// Can manage members, booths, and kizhais.
    Organizer,
    /// Read access to rosters and the dashboard.
    Volunteer,
}

impl UserRole {
    /// Return the privilege level (higher = more privileged).
    pub fn privilege_level(&self) -> u8 {
        match self {
            Self::Admin => 3,
            Self::Organizer => 2,
            Self::Volunteer => 1,
        }
    }

    /// Check if this role has at least the given role's privileges.
    pub fn has_at_least(&self, other: UserRole) -> bool {
        self.privilege_level() >= other.privilege_level()
    }

    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Organizer => "organizer",
            Self::Volunteer => "volunteer",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = boothdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "organizer" => Ok(Self::Organizer),
            "volunteer" => Ok(Self::Volunteer),
            _ => Err(boothdesk_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: admin, organizer, volunteer"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privilege_ordering() {
        assert!(UserRole::Admin.has_at_least(UserRole::Volunteer));
        assert!(UserRole::Admin.has_at_least(UserRole::Admin));
        assert!(UserRole::Organizer.has_at_least(UserRole::Volunteer));
        assert!(!UserRole::Volunteer.has_at_least(UserRole::Organizer));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!(
            "VOLUNTEER".parse::<UserRole>().unwrap(),
            UserRole::Volunteer
        );
        assert!("superuser".parse::<UserRole>().is_err());
    }
}
