//! Document domain model.
//!
//! Documents are immutable fixture records; nothing in the browser creates,
//! updates or deletes them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::error::RuyaError;

/// Opaque, stable document identifier.
///
/// Suitable as a path segment (`/document/{id}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Review status of a document.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DocumentStatus {
    Pending,
    Approved,
    Revision,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Badge text ("Pending").
    pub fn label(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "Pending",
            DocumentStatus::Approved => "Approved",
            DocumentStatus::Revision => "Revision",
        }
    }

    /// Style class of the status badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "status-pending",
            DocumentStatus::Approved => "status-approved",
            DocumentStatus::Revision => "status-revision",
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = RuyaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        DocumentStatus::iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RuyaError::UnknownStatus(trimmed.to_string()))
    }
}

/// A document record as listed in the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: DocumentId,
    pub name: String,
    /// Type label ("PDF", "Word")
    #[serde(rename = "type")]
    pub kind: String,
    /// Size label ("2.4 MB")
    pub size: String,
    /// Relative last-modified label ("2 hours ago")
    pub last_modified: String,
    pub owner: String,
    pub department: String,
    pub status: DocumentStatus,
    pub tags: Vec<String>,
}

impl Document {
    /// Case-insensitive substring match over the name and each tag.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }

    /// Returns true if `query` occurs in the name or in any tag, ignoring case.
    pub fn matches(&self, query: &str) -> bool {
        self.matches_lowercase(&query.to_lowercase())
    }
}

/// One entry of a document's version history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    /// Version label ("v1.2")
    pub version: String,
    /// "Updated 2 hours ago"
    pub updated: String,
    pub current: bool,
}

/// One entry of a document's activity log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// "Document approved"
    pub action: String,
    pub actor: String,
    pub when: String,
}
