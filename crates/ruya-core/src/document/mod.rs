//! Document domain module.
//!
//! # Module Structure
//!
//! - `model`: `Document`, `DocumentId`, `DocumentStatus` and sidebar records
//! - `index`: the ordered in-memory index and its search filter
//! - `fixtures`: the built-in demo documents
//!
//! # Usage
//!
//! ```
//! use ruya_core::document::DocumentIndex;
//!
//! let index = DocumentIndex::sample();
//! let hits = index.filter("report");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].id.as_str(), "1");
//! ```

pub mod fixtures;
mod index;
mod model;

// Re-export public API
pub use index::{DocumentIndex, filter};
pub use model::{ActivityEntry, Document, DocumentId, DocumentStatus, VersionEntry};
