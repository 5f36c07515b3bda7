//! Session domain model.

use serde::{Deserialize, Serialize};

use crate::role::{CapabilitySet, Role};

/// Who is signed in, if anyone.
///
/// The capability set is resolved once at login and travels with the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn {
        role: Role,
        capabilities: CapabilitySet,
    },
}

impl Session {
    /// Signs in as `role`. Always succeeds and replaces any previous session.
    pub fn login(role: Role) -> Self {
        Session::LoggedIn {
            role,
            capabilities: role.capabilities(),
        }
    }

    pub fn logout() -> Self {
        Session::LoggedOut
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Session::LoggedOut => None,
            Session::LoggedIn { role, .. } => Some(*role),
        }
    }

    pub fn capabilities(&self) -> Option<&CapabilitySet> {
        match self {
            Session::LoggedOut => None,
            Session::LoggedIn { capabilities, .. } => Some(capabilities),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::LoggedIn { .. })
    }
}

/// Login form contents.
///
/// Credentials are accepted without validation; only the role matters.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            ..Default::default()
        }
    }

    pub fn with_credentials(
        role: Role,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            role,
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("role", &self.role)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::capabilities_for;

    #[test]
    fn test_initial_session_is_logged_out() {
        let session = Session::default();
        assert_eq!(session, Session::LoggedOut);
        assert!(session.role().is_none());
        assert!(session.capabilities().is_none());
    }

    #[test]
    fn test_login_resolves_capabilities() {
        let session = Session::login(Role::Manager);
        assert!(session.is_logged_in());
        assert_eq!(session.role(), Some(Role::Manager));
        assert_eq!(session.capabilities(), Some(&capabilities_for(Role::Manager)));
    }

    #[test]
    fn test_logout_returns_to_initial_state() {
        let _ = Session::login(Role::Admin);
        assert_eq!(Session::logout(), Session::default());
    }

    #[test]
    fn test_login_request_defaults_to_employee() {
        let request: LoginRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.role, Role::Employee);
    }

    #[test]
    fn test_login_request_debug_redacts_password() {
        let request = LoginRequest::with_credentials(Role::Admin, "a@b.c", "hunter2");
        let rendered = format!("{:?}", request);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("a@b.c"));
    }
}
