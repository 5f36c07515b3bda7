//! Active-document selection.

use serde::{Deserialize, Serialize};

use crate::document::{DocumentId, DocumentIndex};
use crate::error::{Result, RuyaError};

/// The document currently chosen for detail display, if any.
///
/// A present selection always names a document of the index it was set
/// against.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    current: Option<DocumentId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `id` if the index contains it.
    ///
    /// An unknown id yields `RuyaError::NotFound` and leaves the previous
    /// selection in place.
    pub fn select(&mut self, index: &DocumentIndex, id: &DocumentId) -> Result<()> {
        if !index.contains(id) {
            return Err(RuyaError::not_found("document", id.as_str()));
        }
        self.current = Some(id.clone());
        Ok(())
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&DocumentId> {
        self.current.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_existing_document() {
        let index = DocumentIndex::sample();
        let mut selection = Selection::new();
        selection.select(&index, &DocumentId::new("2")).unwrap();
        assert_eq!(selection.current(), Some(&DocumentId::new("2")));
    }

    #[test]
    fn test_select_missing_document_keeps_previous() {
        let index = DocumentIndex::sample();
        let mut selection = Selection::new();
        selection.select(&index, &DocumentId::new("1")).unwrap();

        let err = selection.select(&index, &DocumentId::new("404")).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(selection.current(), Some(&DocumentId::new("1")));
    }

    #[test]
    fn test_clear() {
        let index = DocumentIndex::sample();
        let mut selection = Selection::new();
        selection.select(&index, &DocumentId::new("3")).unwrap();
        selection.clear();
        assert!(selection.is_empty());
    }
}
