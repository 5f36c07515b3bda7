use anyhow::{Context, Result, bail};
use serde::Serialize;

use ruya_core::browser::{BrowserState, Outcome, UiEvent, ViewState};
use ruya_core::config::RuyaConfig;
use ruya_core::document::{DocumentId, DocumentIndex};
use ruya_core::role::Role;
use ruya_core::session::LoginRequest;

/// One-shot render request built from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct RenderRequest {
    pub role: Option<String>,
    pub query: Option<String>,
    pub select: Option<String>,
    pub document: Option<String>,
}

impl RenderRequest {
    /// Translates the flags into the event sequence a user would produce.
    pub fn events(&self) -> Result<Vec<UiEvent>> {
        let Some(role) = &self.role else {
            if self.query.is_some() || self.select.is_some() || self.document.is_some() {
                bail!("--query, --select and --document require --role");
            }
            return Ok(Vec::new());
        };

        let role: Role = role.parse().context("Invalid --role")?;
        let mut events = vec![UiEvent::SubmitLogin(LoginRequest::new(role))];
        if let Some(query) = &self.query {
            events.push(UiEvent::SetSearchQuery(query.clone()));
        }
        if let Some(id) = &self.select {
            events.push(UiEvent::SelectDocument(DocumentId::new(id.as_str())));
        }
        if let Some(id) = &self.document {
            events.push(UiEvent::NavigateToDocumentDetail(DocumentId::new(id.as_str())));
        }
        Ok(events)
    }
}

#[derive(Serialize)]
struct Snapshot<'a> {
    state: &'a BrowserState,
    view: ViewState,
    /// Events that were not applied, in order
    outcomes: Vec<Outcome>,
}

/// Replays the request against the demo index and returns the JSON snapshot.
pub fn snapshot(config: &RuyaConfig, request: &RenderRequest) -> Result<serde_json::Value> {
    let index = DocumentIndex::sample();
    let mut state = BrowserState::new(config.browser.default_selection);
    let mut outcomes: Vec<Outcome> = Vec::new();

    for event in request.events()? {
        let transition = state.apply(&index, event);
        if transition.outcome != Outcome::Applied {
            outcomes.push(transition.outcome);
        }
        state = transition.state;
    }

    let snapshot = Snapshot {
        state: &state,
        view: ViewState::project(&state, &index),
        outcomes,
    };
    Ok(serde_json::to_value(&snapshot)?)
}

pub fn run(config: &RuyaConfig, request: &RenderRequest) -> Result<()> {
    let value = snapshot(config, request)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_role_renders_login() {
        let value = snapshot(&RuyaConfig::default(), &RenderRequest::default()).unwrap();
        assert_eq!(value["view"]["screen"], "login");
        assert_eq!(value["state"]["session"]["type"], "LoggedOut");
    }

    #[test]
    fn test_flags_without_role_are_rejected() {
        let request = RenderRequest {
            query: Some("q3".to_string()),
            ..Default::default()
        };
        assert!(snapshot(&RuyaConfig::default(), &request).is_err());
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let request = RenderRequest {
            role: Some("auditor".to_string()),
            ..Default::default()
        };
        let err = snapshot(&RuyaConfig::default(), &request).unwrap_err();
        assert!(format!("{:#}", err).contains("Unknown role: 'auditor'"));
    }

    #[test]
    fn test_detail_snapshot() {
        let request = RenderRequest {
            role: Some("admin".to_string()),
            document: Some("1".to_string()),
            ..Default::default()
        };
        let value = snapshot(&RuyaConfig::default(), &request).unwrap();
        assert_eq!(value["view"]["screen"], "detail");
        assert_eq!(value["view"]["view"]["type"], "found");
        assert_eq!(value["view"]["view"]["detail"]["document"]["id"], "1");
    }

    #[test]
    fn test_missing_selection_is_reported() {
        let request = RenderRequest {
            role: Some("employee".to_string()),
            select: Some("404".to_string()),
            ..Default::default()
        };
        let value = snapshot(&RuyaConfig::default(), &request).unwrap();
        assert_eq!(value["outcomes"][0]["type"], "notFound");
        assert_eq!(value["outcomes"][0]["id"], "404");
        assert_eq!(value["view"]["preview"]["type"], "placeholder");
    }
}
