//! Text rendering of the browser's view state.
//!
//! Rendering produces styled lines; colors are applied only when printing so
//! the layout can be tested as plain text.

use colored::Colorize;
use ruya_core::browser::{
    BrowseView, Chrome, DetailScreen, DetailView, DocumentDetail, DocumentRow, LoginView,
    Outcome, PreviewPane, SidebarSection, ViewState,
};
use ruya_core::role::{Role, capabilities_for};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Title,
    Heading,
    Plain,
    Muted,
    Highlight,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub style: Style,
    pub text: String,
}

impl Line {
    fn new(style: Style, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    fn blank() -> Self {
        Self::new(Style::Plain, "")
    }
}

/// Prints lines to stdout with colors.
pub fn print_lines(lines: &[Line]) {
    for line in lines {
        let text = line.text.as_str();
        match line.style {
            Style::Title => println!("{}", text.bright_magenta().bold()),
            Style::Heading => println!("{}", text.bright_yellow()),
            Style::Plain => println!("{}", text),
            Style::Muted => println!("{}", text.bright_black()),
            Style::Highlight => println!("{}", text.green()),
            Style::Warning => println!("{}", text.red()),
        }
    }
}

pub fn render_view(view: &ViewState) -> Vec<Line> {
    match view {
        ViewState::Login(login) => render_login(login),
        ViewState::Browse(browse) => render_browse(browse),
        ViewState::Detail(detail) => render_detail_screen(detail),
    }
}

/// Feedback for events that were not applied.
pub fn render_outcome(outcome: &Outcome) -> Option<Line> {
    match outcome {
        Outcome::Applied => None,
        Outcome::NotFound { id } => Some(Line::new(
            Style::Warning,
            format!("Document '{}' not found; selection unchanged", id),
        )),
        Outcome::RequiresLogin => Some(Line::new(
            Style::Warning,
            "Sign in first: /login <admin|manager|employee>",
        )),
    }
}

fn render_login(login: &LoginView) -> Vec<Line> {
    let mut lines = vec![
        Line::new(Style::Title, "=== Ruya DMS ==="),
        Line::new(
            Style::Muted,
            "Enterprise document management with role-based access control",
        ),
        Line::blank(),
        Line::new(Style::Heading, "Select your role"),
    ];
    for option in &login.roles {
        let marker = if option.role == login.default_role { "*" } else { " " };
        lines.push(Line::new(
            Style::Plain,
            format!("{} {:<9} {}", marker, option.label, option.description),
        ));
    }
    lines.push(Line::blank());
    lines.push(Line::new(
        Style::Muted,
        format!(
            "/login <role> [email] [password] to sign in ({} by default)",
            login.default_role
        ),
    ));
    lines
}

fn render_chrome(chrome: &Chrome) -> Vec<Line> {
    let navigation: Vec<String> = chrome
        .navigation
        .iter()
        .map(|item| match item.badge {
            Some(badge) => format!("{} ({})", item.label, badge),
            None => item.label.to_string(),
        })
        .collect();

    let mut lines = vec![
        Line::new(
            Style::Title,
            format!(
                "Ruya DMS | {} ({}) [{}]",
                chrome.user_name, chrome.role_label, chrome.avatar_initial
            ),
        ),
        Line::new(Style::Plain, format!("Navigation: {}", navigation.join(" | "))),
        Line::new(
            Style::Muted,
            format!("Departments: {}", chrome.departments.join(", ")),
        ),
    ];
    if let Some(count) = chrome.notifications {
        lines.push(Line::new(Style::Plain, format!("Notifications: {}", count)));
    }
    lines
}

fn render_row(row: &DocumentRow) -> Line {
    let marker = if row.selected { ">" } else { " " };
    let text = format!(
        "{} [{}] {}  {} • {}  [{}]  {}",
        marker, row.id, row.name, row.kind, row.size, row.status.label, row.last_modified
    );
    let style = if row.selected {
        Style::Highlight
    } else {
        Style::Plain
    };
    Line::new(style, text)
}

fn render_browse(browse: &BrowseView) -> Vec<Line> {
    let mut lines = render_chrome(&browse.chrome);
    lines.push(Line::blank());

    if browse.query.is_empty() {
        lines.push(Line::new(Style::Muted, browse.search_placeholder));
    } else {
        lines.push(Line::new(Style::Plain, format!("Search: \"{}\"", browse.query)));
    }

    lines.push(Line::new(
        Style::Heading,
        format!("Documents ({})", browse.documents.len()),
    ));
    if browse.documents.is_empty() {
        lines.push(Line::new(Style::Muted, "  No documents match"));
    }
    lines.extend(browse.documents.iter().map(render_row));
    lines.push(Line::blank());

    match &browse.preview {
        PreviewPane::Placeholder { title, hint } => {
            lines.push(Line::new(Style::Plain, *title));
            lines.push(Line::new(Style::Muted, *hint));
        }
        PreviewPane::Selected { detail } => lines.extend(render_detail(detail)),
    }
    lines
}

fn render_detail_screen(screen: &DetailScreen) -> Vec<Line> {
    match &screen.view {
        DetailView::Found { detail } => {
            let mut lines = render_detail(detail);
            lines.push(Line::new(Style::Muted, "/back to return to documents"));
            lines
        }
        DetailView::NotFound { id, message } => vec![
            Line::new(Style::Warning, format!("{}: '{}'", message, id)),
            Line::new(Style::Muted, "/back to return to documents"),
        ],
    }
}

fn render_detail(detail: &DocumentDetail) -> Vec<Line> {
    let actions: Vec<&str> = detail.actions.iter().map(|a| a.label()).collect();
    let mut lines = vec![
        Line::new(Style::Title, detail.document.name.clone()),
        Line::new(Style::Muted, detail.subtitle.clone()),
        Line::new(Style::Plain, format!("Actions: {}", actions.join(" | "))),
    ];

    for section in &detail.sections {
        lines.push(Line::new(Style::Heading, section.title()));
        match section {
            SidebarSection::DocumentInfo { status, size, kind } => {
                lines.push(Line::new(Style::Plain, format!("  Status: {}", status.label)));
                lines.push(Line::new(Style::Plain, format!("  Size:   {}", size)));
                lines.push(Line::new(Style::Plain, format!("  Type:   {}", kind)));
            }
            SidebarSection::People { owner, department } => {
                lines.push(Line::new(Style::Plain, format!("  Owner:      {}", owner)));
                lines.push(Line::new(Style::Plain, format!("  Department: {}", department)));
            }
            SidebarSection::Tags { tags } => {
                lines.push(Line::new(Style::Plain, format!("  {}", tags.join(", "))));
            }
            SidebarSection::VersionHistory { entries } => {
                for entry in entries {
                    let current = if entry.current { " (Current)" } else { "" };
                    lines.push(Line::new(
                        Style::Plain,
                        format!("  {}{}  {}", entry.version, current, entry.updated),
                    ));
                }
            }
            SidebarSection::ActivityLog { entries } => {
                for entry in entries {
                    lines.push(Line::new(
                        Style::Plain,
                        format!("  {} by {} • {}", entry.action, entry.actor, entry.when),
                    ));
                }
            }
            SidebarSection::Acknowledge { label } => {
                lines.push(Line::new(Style::Highlight, format!("  [{}]", label)));
            }
        }
    }
    lines
}

/// The role policy as a table, one row per capability.
pub fn render_capability_table() -> Vec<Line> {
    let roles = Role::all();
    let caps: Vec<_> = roles.iter().map(|role| capabilities_for(*role)).collect();
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };

    let rows: [(&str, Vec<bool>); 6] = [
        (
            "view full metadata / activity log",
            caps.iter().map(|c| c.view_full_metadata).collect(),
        ),
        (
            "view version history",
            caps.iter().map(|c| c.view_version_history).collect(),
        ),
        (
            "edit / approve actions",
            caps.iter().map(|c| c.edit_and_approve).collect(),
        ),
        (
            "must acknowledge",
            caps.iter().map(|c| c.must_acknowledge).collect(),
        ),
        (
            "pending approvals",
            caps.iter().map(|c| c.view_pending_approvals).collect(),
        ),
        (
            "notifications bell",
            caps.iter().map(|c| c.view_notifications).collect(),
        ),
    ];

    let header: Vec<String> = roles.iter().map(|r| format!("{:<9}", r.as_str())).collect();
    let mut lines = vec![Line::new(
        Style::Heading,
        format!("{:<36}{}", "capability", header.join("")),
    )];
    for (name, flags) in rows {
        let cells: Vec<String> = flags.into_iter().map(|f| format!("{:<9}", yes_no(f))).collect();
        lines.push(Line::new(Style::Plain, format!("{:<36}{}", name, cells.join(""))));
    }
    lines
}
