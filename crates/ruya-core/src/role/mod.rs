//! Role domain module.
//!
//! # Module Structure
//!
//! - `model`: the closed `Role` enum and its labels
//! - `capability`: the role-to-capability policy table
//!
//! # Usage
//!
//! ```
//! use ruya_core::role::{Role, capabilities_for};
//!
//! let caps = capabilities_for(Role::Employee);
//! assert!(!caps.view_full_metadata);
//! assert!(capabilities_for(Role::Admin).view_full_metadata);
//! ```

mod capability;
mod model;

// Re-export public API
pub use capability::{CapabilitySet, capabilities_for};
pub use model::{Role, RoleIcon};
