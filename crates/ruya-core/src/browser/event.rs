//! Inbound events forwarded by the presentation layer.

use serde::{Deserialize, Serialize};

use crate::document::DocumentId;
use crate::session::LoginRequest;

/// A discrete user action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum UiEvent {
    SubmitLogin(LoginRequest),
    Logout,
    /// Search-as-you-type: the full current contents of the search box
    SetSearchQuery(String),
    /// Pick a document in the list for inline preview
    SelectDocument(DocumentId),
    /// Open the dedicated detail screen (`/document/{id}`)
    NavigateToDocumentDetail(DocumentId),
    /// Leave the detail screen for the document list
    Back,
    ClearSelection,
}

impl UiEvent {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::SubmitLogin(_) => "submit_login",
            UiEvent::Logout => "logout",
            UiEvent::SetSearchQuery(_) => "set_search_query",
            UiEvent::SelectDocument(_) => "select_document",
            UiEvent::NavigateToDocumentDetail(_) => "navigate_to_document_detail",
            UiEvent::Back => "back",
            UiEvent::ClearSelection => "clear_selection",
        }
    }
}

/// Which screen the browser is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "camelCase")]
pub enum Screen {
    #[default]
    Login,
    Browse,
    Detail(DocumentId),
}

/// What happened to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Outcome {
    Applied,
    /// The requested document does not exist; state is unchanged
    NotFound { id: DocumentId },
    /// A browse event arrived while logged out; state is unchanged
    RequiresLogin,
}
