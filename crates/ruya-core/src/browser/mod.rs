//! Document browser: state, reducer and render model.
//!
//! The browser is a pure state machine. A front end forwards [`UiEvent`]s
//! into [`reduce`], then draws the [`ViewState`] projected from the new state.
//!
//! # Usage
//!
//! ```
//! use ruya_core::browser::{BrowserState, UiEvent, ViewState};
//! use ruya_core::document::DocumentIndex;
//! use ruya_core::role::Role;
//! use ruya_core::session::LoginRequest;
//!
//! let index = DocumentIndex::sample();
//! let state = BrowserState::default()
//!     .apply(&index, UiEvent::SubmitLogin(LoginRequest::new(Role::Manager)))
//!     .state;
//! assert!(matches!(ViewState::project(&state, &index), ViewState::Browse(_)));
//! ```

mod event;
mod state;
mod view;

// Re-export public API
pub use event::{Outcome, Screen, UiEvent};
pub use state::{BrowserState, Transition, reduce};
pub use view::{
    BrowseView, Chrome, DetailScreen, DetailView, DocumentDetail, DocumentRow, HeaderAction,
    LoginView, NavItem, NavKind, PreviewPane, RoleOption, SidebarSection, StatusBadge, ViewState,
    detail_path,
};
