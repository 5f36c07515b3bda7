//! Role domain model.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::error::RuyaError;

/// A user role chosen at login.
///
/// The set is closed. Adding a role means extending this enum and every
/// exhaustive match over it (capability table, icons, descriptions).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    /// Preselected on the login form
    #[default]
    Employee,
}

/// Icon shown next to a role in the login role picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleIcon {
    Crown,
    Shield,
    User,
}

impl Role {
    /// All roles in the order the login picker lists them.
    pub fn all() -> Vec<Role> {
        Role::iter().collect()
    }

    /// Lowercase identifier, as accepted by `FromStr`.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Capitalized label ("Admin").
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Employee => "Employee",
        }
    }

    /// Single-letter avatar fallback.
    pub fn initial(&self) -> char {
        match self {
            Role::Admin => 'A',
            Role::Manager => 'M',
            Role::Employee => 'E',
        }
    }

    pub fn icon(&self) -> RoleIcon {
        match self {
            Role::Admin => RoleIcon::Crown,
            Role::Manager => RoleIcon::Shield,
            Role::Employee => RoleIcon::User,
        }
    }

    /// Description shown under the role picker.
    pub fn description(&self) -> &'static str {
        match self {
            Role::Admin => {
                "Full system access with complete metadata, activity logs, and version control"
            }
            Role::Manager => "Metadata access with versioning capabilities and approval workflows",
            Role::Employee => {
                "Document access with acknowledgment capabilities and basic metadata"
            }
        }
    }

    /// Label of the login submit button.
    pub fn sign_in_label(&self) -> String {
        format!("Sign In as {}", self.display_name())
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RuyaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Role::iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RuyaError::UnknownRole(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("Manager".parse::<Role>().unwrap(), Role::Manager);
        assert_eq!(" EMPLOYEE ".parse::<Role>().unwrap(), Role::Employee);
    }

    #[test]
    fn test_parse_unknown_role() {
        let err = "guest".parse::<Role>().unwrap_err();
        assert_eq!(err, RuyaError::UnknownRole("guest".to_string()));
    }

    #[test]
    fn test_default_role_is_employee() {
        assert_eq!(Role::default(), Role::Employee);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::Manager.display_name(), "Manager");
        assert_eq!(Role::Employee.initial(), 'E');
        assert_eq!(Role::Admin.sign_in_label(), "Sign In as Admin");
        assert_eq!(Role::Manager.icon(), RoleIcon::Shield);
    }

    #[test]
    fn test_all_roles_in_picker_order() {
        assert_eq!(Role::all(), vec![Role::Admin, Role::Manager, Role::Employee]);
    }
}
