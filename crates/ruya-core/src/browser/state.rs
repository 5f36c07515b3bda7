//! Browser state and its reducer.

use serde::Serialize;
use tracing::{debug, info, warn};

use super::event::{Outcome, Screen, UiEvent};
use crate::config::DefaultSelection;
use crate::document::DocumentIndex;
use crate::session::{Selection, Session};

/// Everything the document browser remembers between events.
///
/// Owned by the caller and threaded through [`reduce`]; nothing here is
/// global.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserState {
    pub session: Session,
    pub screen: Screen,
    pub query: String,
    pub selection: Selection,
    /// Applied every time the browse view is entered
    #[serde(skip)]
    pub default_selection: DefaultSelection,
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: BrowserState,
    pub outcome: Outcome,
}

impl Transition {
    fn applied(state: BrowserState) -> Self {
        Self {
            state,
            outcome: Outcome::Applied,
        }
    }

    fn unchanged(state: BrowserState, outcome: Outcome) -> Self {
        Self { state, outcome }
    }
}

impl BrowserState {
    /// Logged-out state that will apply `default_selection` at login.
    pub fn new(default_selection: DefaultSelection) -> Self {
        Self {
            default_selection,
            ..Default::default()
        }
    }

    /// Applies `event` against `index`. See [`reduce`].
    pub fn apply(self, index: &DocumentIndex, event: UiEvent) -> Transition {
        reduce(self, index, event)
    }

    fn enter_browse(&mut self, index: &DocumentIndex) {
        self.screen = Screen::Browse;
        self.query.clear();
        self.selection.clear();
        if self.default_selection == DefaultSelection::FirstDocument {
            if let Some(first) = index.first() {
                // first() comes from the index itself, so select cannot fail
                let _ = self.selection.select(index, &first.id);
            }
        }
    }
}

/// The browser's pure transition function: `(state, event) -> state`.
///
/// Login and logout always succeed. Every other event requires a session and
/// is answered with `Outcome::RequiresLogin` otherwise. Selecting an unknown
/// document answers `Outcome::NotFound` and keeps the previous selection.
/// Navigating to an unknown document is applied; the detail screen then
/// renders its not-found state.
pub fn reduce(mut state: BrowserState, index: &DocumentIndex, event: UiEvent) -> Transition {
    debug!(event = event.name(), "Reducing browser event");

    match event {
        UiEvent::SubmitLogin(request) => {
            info!(role = %request.role, "User signed in");
            state.session = Session::login(request.role);
            state.enter_browse(index);
            Transition::applied(state)
        }
        UiEvent::Logout => {
            if let Some(role) = state.session.role() {
                info!(role = %role, "User signed out");
            }
            Transition::applied(BrowserState::new(state.default_selection))
        }
        _ if !state.session.is_logged_in() => {
            debug!("Ignoring browse event while logged out");
            Transition::unchanged(state, Outcome::RequiresLogin)
        }
        UiEvent::SetSearchQuery(query) => {
            state.query = query;
            Transition::applied(state)
        }
        UiEvent::SelectDocument(id) => match state.selection.select(index, &id) {
            Ok(()) => Transition::applied(state),
            Err(_) => {
                warn!(id = %id, "Selected document not found");
                Transition::unchanged(state, Outcome::NotFound { id })
            }
        },
        UiEvent::NavigateToDocumentDetail(id) => {
            if state.selection.select(index, &id).is_err() {
                warn!(id = %id, "Navigated to unknown document");
            }
            state.screen = Screen::Detail(id);
            Transition::applied(state)
        }
        UiEvent::Back => {
            if matches!(state.screen, Screen::Detail(_)) {
                state.screen = Screen::Browse;
            }
            Transition::applied(state)
        }
        UiEvent::ClearSelection => {
            state.selection.clear();
            Transition::applied(state)
        }
    }
}
