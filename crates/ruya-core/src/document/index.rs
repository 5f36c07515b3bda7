//! In-memory document index and search filter.

use tracing::debug;

use super::fixtures::sample_documents;
use super::model::{Document, DocumentId};
use crate::error::{Result, RuyaError};

/// Filters `documents` by a search query.
///
/// A document matches when the query, ignoring case, is a substring of its
/// name or of any one of its tags. An empty query matches everything. The
/// result keeps input order.
pub fn filter<'a>(
    documents: &'a [Document],
    query: &str,
) -> impl Iterator<Item = &'a Document> + use<'a> {
    let needle = query.to_lowercase();
    documents
        .iter()
        .filter(move |doc| needle.is_empty() || doc.matches_lowercase(&needle))
}

/// Ordered, immutable collection of documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentIndex {
    documents: Vec<Document>,
}

impl DocumentIndex {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Index over the built-in demo documents.
    pub fn sample() -> Self {
        Self::new(sample_documents())
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn first(&self) -> Option<&Document> {
        self.documents.first()
    }

    pub fn contains(&self, id: &DocumentId) -> bool {
        self.documents.iter().any(|doc| &doc.id == id)
    }

    /// Resolves an identifier, or returns `RuyaError::NotFound`.
    pub fn get(&self, id: &DocumentId) -> Result<&Document> {
        self.documents
            .iter()
            .find(|doc| &doc.id == id)
            .ok_or_else(|| RuyaError::not_found("document", id.as_str()))
    }

    /// Documents matching `query`, in index order.
    pub fn filter(&self, query: &str) -> Vec<&Document> {
        let matches: Vec<&Document> = filter(&self.documents, query).collect();
        debug!(query, matched = matches.len(), total = self.len(), "Filtered documents");
        matches
    }

    /// Distinct departments in first-seen order.
    pub fn departments(&self) -> Vec<&str> {
        let mut departments: Vec<&str> = Vec::new();
        for doc in &self.documents {
            if !departments.contains(&doc.department.as_str()) {
                departments.push(&doc.department);
            }
        }
        departments
    }
}
