//! Role-based visibility policy.

use serde::{Deserialize, Serialize};

use super::model::Role;

/// What a role may see and do in the document browser.
///
/// Computed once per session by [`capabilities_for`] and consulted by every
/// view; no call site re-derives these from the role directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapabilitySet {
    /// Full metadata, including the activity log
    pub view_full_metadata: bool,
    pub view_version_history: bool,
    /// Edit and approve actions on a document
    pub edit_and_approve: bool,
    /// The "Acknowledge Document" action must be offered
    pub must_acknowledge: bool,
    /// Pending-approvals navigation entry and its badge
    pub view_pending_approvals: bool,
    pub view_notifications: bool,
}

/// Maps a role to its fixed capability set.
pub fn capabilities_for(role: Role) -> CapabilitySet {
    match role {
        Role::Admin => CapabilitySet {
            view_full_metadata: true,
            view_version_history: true,
            edit_and_approve: true,
            must_acknowledge: false,
            view_pending_approvals: true,
            view_notifications: true,
        },
        Role::Manager => CapabilitySet {
            view_full_metadata: false,
            view_version_history: true,
            edit_and_approve: true,
            must_acknowledge: false,
            view_pending_approvals: true,
            view_notifications: true,
        },
        Role::Employee => CapabilitySet {
            view_full_metadata: false,
            view_version_history: false,
            edit_and_approve: false,
            must_acknowledge: true,
            view_pending_approvals: false,
            view_notifications: false,
        },
    }
}

impl Role {
    pub fn capabilities(self) -> CapabilitySet {
        capabilities_for(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_capabilities() {
        let caps = capabilities_for(Role::Admin);
        assert!(caps.view_full_metadata);
        assert!(caps.view_version_history);
        assert!(caps.edit_and_approve);
        assert!(!caps.must_acknowledge);
        assert!(caps.view_pending_approvals);
        assert!(caps.view_notifications);
    }

    #[test]
    fn test_manager_capabilities() {
        let caps = capabilities_for(Role::Manager);
        assert!(!caps.view_full_metadata);
        assert!(caps.view_version_history);
        assert!(caps.edit_and_approve);
        assert!(!caps.must_acknowledge);
        assert!(caps.view_pending_approvals);
        assert!(caps.view_notifications);
    }

    #[test]
    fn test_employee_capabilities() {
        let caps = capabilities_for(Role::Employee);
        assert!(!caps.view_full_metadata);
        assert!(!caps.view_version_history);
        assert!(!caps.edit_and_approve);
        assert!(caps.must_acknowledge);
        assert!(!caps.view_pending_approvals);
        assert!(!caps.view_notifications);
    }

    #[test]
    fn test_capabilities_are_deterministic() {
        for role in Role::all() {
            assert_eq!(capabilities_for(role), capabilities_for(role));
            assert_eq!(role.capabilities(), capabilities_for(role));
        }
    }

    #[test]
    fn test_acknowledge_excludes_edit() {
        for role in Role::all() {
            let caps = role.capabilities();
            assert_ne!(caps.must_acknowledge, caps.edit_and_approve);
        }
    }
}
