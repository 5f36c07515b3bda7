//! Parsing of REPL input lines.

use ruya_core::RuyaError;
use ruya_core::browser::UiEvent;
use ruya_core::document::DocumentId;
use ruya_core::role::Role;
use ruya_core::session::LoginRequest;
use thiserror::Error;

/// Slash commands offered for completion, in help order.
pub const COMMANDS: &[&str] = &[
    "/login", "/logout", "/search", "/select", "/open", "/back", "/clear", "/show", "/roles",
    "/help",
];

/// What the user asked the REPL to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Forward an event to the browser
    Event(UiEvent),
    /// Redraw the current screen
    Show,
    /// Print the role capability table
    Roles,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown command: {0} (type /help)")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Domain(#[from] RuyaError),
}

/// Parses one line of REPL input.
///
/// `/search` keeps the rest of the line verbatim, including inner and
/// trailing spaces, so the query matches what the user typed.
pub fn parse_line(line: &str) -> Result<ReplCommand, InputError> {
    let line = line.trim_start();
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest),
        None => (line.trim_end(), ""),
    };
    let mut args = rest.split_whitespace();

    let parsed = match command {
        "quit" | "exit" | "/quit" | "/exit" => ReplCommand::Quit,
        "/help" => ReplCommand::Help,
        "/show" => ReplCommand::Show,
        "/roles" => ReplCommand::Roles,
        "/login" => {
            // Role defaults to employee, like the login form
            let role = match args.next() {
                Some(role) => role.parse::<Role>()?,
                None => Role::default(),
            };
            let email = args.next().unwrap_or_default();
            let password = args.next().unwrap_or_default();
            ReplCommand::Event(UiEvent::SubmitLogin(LoginRequest::with_credentials(
                role, email, password,
            )))
        }
        "/logout" => ReplCommand::Event(UiEvent::Logout),
        "/search" => ReplCommand::Event(UiEvent::SetSearchQuery(rest.to_string())),
        "/select" => {
            let id = args.next().ok_or(InputError::MissingArgument("/select <id>"))?;
            ReplCommand::Event(UiEvent::SelectDocument(DocumentId::new(id)))
        }
        "/open" => {
            let id = args.next().ok_or(InputError::MissingArgument("/open <id>"))?;
            ReplCommand::Event(UiEvent::NavigateToDocumentDetail(DocumentId::new(id)))
        }
        "/back" => ReplCommand::Event(UiEvent::Back),
        "/clear" => ReplCommand::Event(UiEvent::ClearSelection),
        other => return Err(InputError::UnknownCommand(other.to_string())),
    };
    Ok(parsed)
}

pub fn help_text() -> Vec<&'static str> {
    vec![
        "/login [admin|manager|employee] [email] [password]  Sign in (credentials are not checked)",
        "/logout                                             Sign out",
        "/search <text>                                      Filter documents by name or tag",
        "/select <id>                                        Preview a document inline",
        "/open <id>                                          Open a document's detail screen",
        "/back                                               Return to the document list",
        "/clear                                              Clear the selection",
        "/show                                               Redraw the current screen",
        "/roles                                              Show what each role can see",
        "quit                                                Exit",
    ]
}
