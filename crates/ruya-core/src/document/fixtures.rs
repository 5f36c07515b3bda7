//! Built-in demo data.

use super::model::{ActivityEntry, Document, DocumentId, DocumentStatus, VersionEntry};

/// Count shown on the "Pending Approvals" navigation badge.
pub const PENDING_APPROVALS_BADGE: u32 = 3;

/// Count shown on the notification bell.
pub const NOTIFICATION_BADGE: u32 = 2;

/// Display name of the signed-in demo user.
pub const DEMO_USER_NAME: &str = "Demo User";

#[allow(clippy::too_many_arguments)]
fn document(
    id: &str,
    name: &str,
    kind: &str,
    size: &str,
    last_modified: &str,
    owner: &str,
    department: &str,
    status: DocumentStatus,
    tags: &[&str],
) -> Document {
    Document {
        id: DocumentId::new(id),
        name: name.to_string(),
        kind: kind.to_string(),
        size: size.to_string(),
        last_modified: last_modified.to_string(),
        owner: owner.to_string(),
        department: department.to_string(),
        status,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// The three documents of the demo, in display order.
pub fn sample_documents() -> Vec<Document> {
    vec![
        document(
            "1",
            "Q3 Financial Report.pdf",
            "PDF",
            "2.4 MB",
            "2 hours ago",
            "Sarah Johnson",
            "Finance",
            DocumentStatus::Approved,
            &["Finance", "Q3", "Report"],
        ),
        document(
            "2",
            "Employee Handbook 2024.docx",
            "Word",
            "1.8 MB",
            "1 day ago",
            "HR Department",
            "Human Resources",
            DocumentStatus::Pending,
            &["HR", "Handbook", "Policy"],
        ),
        document(
            "3",
            "Project Proposal - Ruya 2.0.pptx",
            "PowerPoint",
            "5.2 MB",
            "3 days ago",
            "Ahmed Al-Rashid",
            "Engineering",
            DocumentStatus::Revision,
            &["Project", "Engineering", "Proposal"],
        ),
    ]
}

/// Version history shown in the detail sidebar. Identical for every document.
pub fn version_history(_document: &Document) -> Vec<VersionEntry> {
    vec![
        VersionEntry {
            version: "v1.2".to_string(),
            updated: "Updated 2 hours ago".to_string(),
            current: true,
        },
        VersionEntry {
            version: "v1.1".to_string(),
            updated: "Updated 1 day ago".to_string(),
            current: false,
        },
    ]
}

/// Activity log shown in the detail sidebar. Identical for every document.
pub fn activity_log(_document: &Document) -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            action: "Document approved".to_string(),
            actor: "Sarah Johnson".to_string(),
            when: "2 hours ago".to_string(),
        },
        ActivityEntry {
            action: "Document updated".to_string(),
            actor: "Ahmed Al-Rashid".to_string(),
            when: "1 day ago".to_string(),
        },
    ]
}
