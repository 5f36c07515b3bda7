//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: `Session` (logged out / logged in as a role) and `LoginRequest`
//! - `selection`: the active-document `Selection`

mod model;
mod selection;

// Re-export public API
pub use model::{LoginRequest, Session};
pub use selection::Selection;
