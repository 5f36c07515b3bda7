//! Render model projected from [`BrowserState`].
//!
//! A `ViewState` is everything a front end needs to draw the current screen.
//! All role gating happens here, from the session's stored capability set.

use serde::Serialize;

use super::event::Screen;
use super::state::BrowserState;
use crate::document::fixtures::{
    DEMO_USER_NAME, NOTIFICATION_BADGE, PENDING_APPROVALS_BADGE, activity_log, version_history,
};
use crate::document::{
    ActivityEntry, Document, DocumentId, DocumentIndex, DocumentStatus, VersionEntry,
};
use crate::role::{CapabilitySet, Role, RoleIcon};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum ViewState {
    Login(LoginView),
    Browse(BrowseView),
    Detail(DetailScreen),
}

// ============================================================================
// Login
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleOption {
    pub role: Role,
    pub label: &'static str,
    pub icon: RoleIcon,
    pub description: &'static str,
    pub sign_in_label: String,
}

impl RoleOption {
    pub fn for_role(role: Role) -> Self {
        Self {
            role,
            label: role.display_name(),
            icon: role.icon(),
            description: role.description(),
            sign_in_label: role.sign_in_label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginView {
    pub roles: Vec<RoleOption>,
    /// Preselected in the role picker
    pub default_role: Role,
}

// ============================================================================
// Shared pieces
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBadge {
    pub status: DocumentStatus,
    pub label: &'static str,
    pub class: &'static str,
}

impl From<DocumentStatus> for StatusBadge {
    fn from(status: DocumentStatus) -> Self {
        Self {
            status,
            label: status.label(),
            class: status.badge_class(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NavKind {
    AllDocuments,
    SharedWithMe,
    PendingApprovals,
    RecentActivity,
}

impl NavKind {
    pub fn label(&self) -> &'static str {
        match self {
            NavKind::AllDocuments => "All Documents",
            NavKind::SharedWithMe => "Shared with Me",
            NavKind::PendingApprovals => "Pending Approvals",
            NavKind::RecentActivity => "Recent Activity",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub kind: NavKind,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<u32>,
}

/// Sidebar, user menu and top bar around the document list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chrome {
    pub role: Role,
    pub role_label: &'static str,
    pub user_name: &'static str,
    pub avatar_initial: char,
    pub capabilities: CapabilitySet,
    pub navigation: Vec<NavItem>,
    pub departments: Vec<String>,
    /// Notification bell badge; absent when the bell is hidden
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<u32>,
}

impl Chrome {
    fn new(role: Role, capabilities: &CapabilitySet, index: &DocumentIndex) -> Self {
        let mut navigation = vec![
            NavItem::plain(NavKind::AllDocuments),
            NavItem::plain(NavKind::SharedWithMe),
        ];
        if capabilities.view_pending_approvals {
            navigation.push(NavItem {
                kind: NavKind::PendingApprovals,
                label: NavKind::PendingApprovals.label(),
                badge: Some(PENDING_APPROVALS_BADGE),
            });
        }
        navigation.push(NavItem::plain(NavKind::RecentActivity));

        Self {
            role,
            role_label: role.display_name(),
            user_name: DEMO_USER_NAME,
            avatar_initial: role.initial(),
            capabilities: *capabilities,
            navigation,
            departments: index.departments().into_iter().map(String::from).collect(),
            notifications: capabilities
                .view_notifications
                .then_some(NOTIFICATION_BADGE),
        }
    }
}

impl NavItem {
    fn plain(kind: NavKind) -> Self {
        Self {
            kind,
            label: kind.label(),
            badge: None,
        }
    }
}

// ============================================================================
// Browse
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRow {
    pub id: DocumentId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub size: String,
    pub status: StatusBadge,
    pub last_modified: String,
    pub selected: bool,
    /// Where the row links to
    pub href: String,
}

impl DocumentRow {
    fn new(document: &Document, selected: bool) -> Self {
        Self {
            id: document.id.clone(),
            name: document.name.clone(),
            kind: document.kind.clone(),
            size: document.size.clone(),
            status: document.status.into(),
            last_modified: document.last_modified.clone(),
            selected,
            href: detail_path(&document.id),
        }
    }
}

/// Right-hand pane of the browse screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PreviewPane {
    Placeholder { title: &'static str, hint: &'static str },
    Selected { detail: Box<DocumentDetail> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseView {
    pub chrome: Chrome,
    pub query: String,
    pub search_placeholder: &'static str,
    pub documents: Vec<DocumentRow>,
    pub preview: PreviewPane,
}

// ============================================================================
// Detail
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HeaderAction {
    View,
    Download,
    Share,
    Edit,
}

impl HeaderAction {
    pub fn label(&self) -> &'static str {
        match self {
            HeaderAction::View => "View",
            HeaderAction::Download => "Download",
            HeaderAction::Share => "Share",
            HeaderAction::Edit => "Edit",
        }
    }
}

/// One block of the metadata sidebar, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "section", rename_all = "camelCase")]
pub enum SidebarSection {
    #[serde(rename_all = "camelCase")]
    DocumentInfo {
        status: StatusBadge,
        size: String,
        #[serde(rename = "type")]
        kind: String,
    },
    People {
        owner: String,
        department: String,
    },
    Tags {
        tags: Vec<String>,
    },
    VersionHistory {
        entries: Vec<VersionEntry>,
    },
    ActivityLog {
        entries: Vec<ActivityEntry>,
    },
    Acknowledge {
        label: &'static str,
    },
}

impl SidebarSection {
    pub fn title(&self) -> &'static str {
        match self {
            SidebarSection::DocumentInfo { .. } => "Document Info",
            SidebarSection::People { .. } => "People",
            SidebarSection::Tags { .. } => "Tags",
            SidebarSection::VersionHistory { .. } => "Version History",
            SidebarSection::ActivityLog { .. } => "Activity Log",
            SidebarSection::Acknowledge { .. } => "Acknowledge",
        }
    }
}

/// A resolved document with everything its role may see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDetail {
    pub document: Document,
    pub status: StatusBadge,
    /// "{owner} • {last modified}"
    pub subtitle: String,
    pub actions: Vec<HeaderAction>,
    pub sections: Vec<SidebarSection>,
}

impl DocumentDetail {
    pub fn new(document: &Document, capabilities: &CapabilitySet) -> Self {
        let mut actions = vec![HeaderAction::View, HeaderAction::Download, HeaderAction::Share];
        if capabilities.edit_and_approve {
            actions.push(HeaderAction::Edit);
        }

        let mut sections = vec![
            SidebarSection::DocumentInfo {
                status: document.status.into(),
                size: document.size.clone(),
                kind: document.kind.clone(),
            },
            SidebarSection::People {
                owner: document.owner.clone(),
                department: document.department.clone(),
            },
            SidebarSection::Tags {
                tags: document.tags.clone(),
            },
        ];
        if capabilities.view_version_history {
            sections.push(SidebarSection::VersionHistory {
                entries: version_history(document),
            });
        }
        if capabilities.view_full_metadata {
            sections.push(SidebarSection::ActivityLog {
                entries: activity_log(document),
            });
        }
        if capabilities.must_acknowledge {
            sections.push(SidebarSection::Acknowledge {
                label: "Acknowledge Document",
            });
        }

        Self {
            document: document.clone(),
            status: document.status.into(),
            subtitle: format!("{} • {}", document.owner, document.last_modified),
            actions,
            sections,
        }
    }
}

/// Detail screen content: the document, or a not-found fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DetailView {
    Found { detail: Box<DocumentDetail> },
    NotFound { id: DocumentId, message: &'static str },
}

impl DetailView {
    /// Resolves `id` against `index` for a viewer with `capabilities`.
    pub fn resolve(index: &DocumentIndex, id: &DocumentId, capabilities: &CapabilitySet) -> Self {
        match index.get(id) {
            Ok(document) => DetailView::Found {
                detail: Box::new(DocumentDetail::new(document, capabilities)),
            },
            Err(_) => DetailView::NotFound {
                id: id.clone(),
                message: "Document not found",
            },
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, DetailView::Found { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailScreen {
    pub role: Role,
    pub back_href: &'static str,
    pub view: DetailView,
}

/// Location of a document's detail screen.
pub fn detail_path(id: &DocumentId) -> String {
    format!("/document/{}", id)
}

// ============================================================================
// Projection
// ============================================================================

impl ViewState {
    /// Projects `state` into what should be drawn right now.
    pub fn project(state: &BrowserState, index: &DocumentIndex) -> Self {
        let (role, capabilities) = match (state.session.role(), state.session.capabilities()) {
            (Some(role), Some(capabilities)) => (role, capabilities),
            _ => return ViewState::Login(login_view()),
        };

        match &state.screen {
            Screen::Detail(id) => ViewState::Detail(DetailScreen {
                role,
                back_href: "/",
                view: DetailView::resolve(index, id, capabilities),
            }),
            Screen::Login | Screen::Browse => {
                let selected = state.selection.current();
                let documents = index
                    .filter(&state.query)
                    .into_iter()
                    .map(|doc| DocumentRow::new(doc, Some(&doc.id) == selected))
                    .collect();

                let preview = match selected.and_then(|id| index.get(id).ok()) {
                    Some(document) => PreviewPane::Selected {
                        detail: Box::new(DocumentDetail::new(document, capabilities)),
                    },
                    None => PreviewPane::Placeholder {
                        title: "Select a document to view",
                        hint: "Click on any document from the list to open it in a separate page",
                    },
                };

                ViewState::Browse(BrowseView {
                    chrome: Chrome::new(role, capabilities, index),
                    query: state.query.clone(),
                    search_placeholder: "Search documents, tags, or content...",
                    documents,
                    preview,
                })
            }
        }
    }
}

fn login_view() -> LoginView {
    LoginView {
        roles: Role::all().into_iter().map(RoleOption::for_role).collect(),
        default_role: Role::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::UiEvent;
    use crate::config::DefaultSelection;
    use crate::session::LoginRequest;

    fn browse_as(role: Role) -> (BrowserState, DocumentIndex) {
        let index = DocumentIndex::sample();
        let state = BrowserState::default()
            .apply(&index, UiEvent::SubmitLogin(LoginRequest::new(role)))
            .state;
        (state, index)
    }

    fn expect_browse(view: ViewState) -> BrowseView {
        match view {
            ViewState::Browse(browse) => browse,
            other => panic!("expected browse view, got {:?}", other),
        }
    }

    fn expect_detail(view: ViewState) -> DetailView {
        match view {
            ViewState::Detail(screen) => screen.view,
            other => panic!("expected detail view, got {:?}", other),
        }
    }

    fn section_titles(detail: &DocumentDetail) -> Vec<&'static str> {
        detail.sections.iter().map(SidebarSection::title).collect()
    }

    #[test]
    fn test_logged_out_projects_login() {
        let index = DocumentIndex::sample();
        let view = ViewState::project(&BrowserState::default(), &index);
        match view {
            ViewState::Login(login) => {
                assert_eq!(login.roles.len(), 3);
                assert_eq!(login.default_role, Role::Employee);
                assert_eq!(login.roles[0].icon, RoleIcon::Crown);
                assert_eq!(login.roles[2].sign_in_label, "Sign In as Employee");
            }
            other => panic!("expected login view, got {:?}", other),
        }
    }

    #[test]
    fn test_employee_chrome_hides_approvals_and_bell() {
        let (state, index) = browse_as(Role::Employee);
        let browse = expect_browse(ViewState::project(&state, &index));
        let kinds: Vec<NavKind> = browse.chrome.navigation.iter().map(|n| n.kind).collect();
        assert_eq!(
            kinds,
            vec![NavKind::AllDocuments, NavKind::SharedWithMe, NavKind::RecentActivity]
        );
        assert!(browse.chrome.notifications.is_none());
        assert_eq!(browse.chrome.avatar_initial, 'E');
    }

    #[test]
    fn test_manager_chrome_shows_approvals_with_badge() {
        let (state, index) = browse_as(Role::Manager);
        let browse = expect_browse(ViewState::project(&state, &index));
        let approvals = browse
            .chrome
            .navigation
            .iter()
            .find(|n| n.kind == NavKind::PendingApprovals)
            .expect("pending approvals entry");
        assert_eq!(approvals.badge, Some(3));
        assert_eq!(browse.chrome.notifications, Some(2));
        assert_eq!(
            browse.chrome.departments,
            vec!["Finance", "Human Resources", "Engineering"]
        );
    }

    #[test]
    fn test_browse_lists_filtered_rows_and_placeholder() {
        let (state, index) = browse_as(Role::Admin);
        let state = state
            .apply(&index, UiEvent::SetSearchQuery("engineering".to_string()))
            .state;
        let browse = expect_browse(ViewState::project(&state, &index));
        assert_eq!(browse.documents.len(), 1);
        assert_eq!(browse.documents[0].id, DocumentId::new("3"));
        assert_eq!(browse.documents[0].href, "/document/3");
        assert_eq!(browse.documents[0].status.label, "Revision");
        assert!(matches!(browse.preview, PreviewPane::Placeholder { .. }));
    }

    #[test]
    fn test_selected_row_and_inline_preview() {
        let index = DocumentIndex::sample();
        let state = BrowserState::new(DefaultSelection::FirstDocument)
            .apply(&index, UiEvent::SubmitLogin(LoginRequest::new(Role::Manager)))
            .state;
        let browse = expect_browse(ViewState::project(&state, &index));
        assert!(browse.documents[0].selected);
        assert!(!browse.documents[1].selected);
        match browse.preview {
            PreviewPane::Selected { detail } => {
                assert_eq!(detail.document.id, DocumentId::new("1"))
            }
            other => panic!("expected selected preview, got {:?}", other),
        }
    }

    #[test]
    fn test_admin_detail_sections() {
        let (state, index) = browse_as(Role::Admin);
        let state = state
            .apply(&index, UiEvent::NavigateToDocumentDetail(DocumentId::new("1")))
            .state;
        match expect_detail(ViewState::project(&state, &index)) {
            DetailView::Found { detail } => {
                assert_eq!(
                    section_titles(&detail),
                    vec!["Document Info", "People", "Tags", "Version History", "Activity Log"]
                );
                assert!(detail.actions.contains(&HeaderAction::Edit));
                assert_eq!(detail.subtitle, "Sarah Johnson • 2 hours ago");
            }
            other => panic!("expected found, got {:?}", other),
        }
    }

    #[test]
    fn test_manager_detail_sections() {
        let (state, index) = browse_as(Role::Manager);
        let state = state
            .apply(&index, UiEvent::NavigateToDocumentDetail(DocumentId::new("2")))
            .state;
        match expect_detail(ViewState::project(&state, &index)) {
            DetailView::Found { detail } => {
                assert_eq!(
                    section_titles(&detail),
                    vec!["Document Info", "People", "Tags", "Version History"]
                );
                assert!(detail.actions.contains(&HeaderAction::Edit));
            }
            other => panic!("expected found, got {:?}", other),
        }
    }

    #[test]
    fn test_employee_detail_sections() {
        let (state, index) = browse_as(Role::Employee);
        let state = state
            .apply(&index, UiEvent::NavigateToDocumentDetail(DocumentId::new("3")))
            .state;
        match expect_detail(ViewState::project(&state, &index)) {
            DetailView::Found { detail } => {
                assert_eq!(
                    section_titles(&detail),
                    vec!["Document Info", "People", "Tags", "Acknowledge"]
                );
                assert_eq!(
                    detail.actions,
                    vec![HeaderAction::View, HeaderAction::Download, HeaderAction::Share]
                );
            }
            other => panic!("expected found, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_detail_renders_not_found() {
        let (state, index) = browse_as(Role::Admin);
        let state = state
            .apply(&index, UiEvent::NavigateToDocumentDetail(DocumentId::new("42")))
            .state;
        let view = expect_detail(ViewState::project(&state, &index));
        assert!(!view.is_found());
        assert_eq!(
            view,
            DetailView::NotFound {
                id: DocumentId::new("42"),
                message: "Document not found",
            }
        );
    }

    #[test]
    fn test_view_serializes_tagged() {
        let (state, index) = browse_as(Role::Employee);
        let json = serde_json::to_value(ViewState::project(&state, &index)).unwrap();
        assert_eq!(json["screen"], "browse");
        assert_eq!(json["chrome"]["role"], "employee");
        assert_eq!(json["preview"]["type"], "placeholder");
        assert!(json["chrome"].get("notifications").is_none());
    }
}
