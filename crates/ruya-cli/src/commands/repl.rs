use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing::debug;

use ruya_core::browser::{BrowserState, ViewState};
use ruya_core::config::RuyaConfig;
use ruya_core::document::DocumentIndex;
use ruya_core::role::Role;

use crate::display::{print_lines, render_capability_table, render_outcome, render_view};
use crate::input::{COMMANDS, ReplCommand, help_text, parse_line};

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
    roles: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
            roles: Role::all().iter().map(|r| r.to_string()).collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if let Some(partial) = line.strip_prefix("/login ") {
            if partial.contains(' ') {
                return Ok((pos, vec![]));
            }
            let candidates = self
                .roles
                .iter()
                .filter(|role| role.starts_with(partial))
                .map(|role| Pair {
                    display: role.clone(),
                    replacement: role.clone(),
                })
                .collect();
            return Ok(("/login ".len(), candidates));
        }

        if line.starts_with('/') && !line.contains(' ') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Runs the interactive document browser.
///
/// Each line is parsed into a command; browser events go through the reducer
/// and the resulting screen is redrawn.
pub fn run(config: &RuyaConfig) -> Result<()> {
    let index = DocumentIndex::sample();
    let mut state = BrowserState::new(config.browser.default_selection);

    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    print_lines(&render_view(&ViewState::project(&state, &index)));
    println!(
        "{}",
        "Type /help for commands, or 'quit' to exit.".bright_black()
    );
    println!();

    loop {
        let prompt = match state.session.role() {
            Some(role) => format!("{}> ", role),
            None => ">> ".to_string(),
        };

        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                let command = match parse_line(&line) {
                    Ok(command) => command,
                    Err(e) => {
                        eprintln!("{}", e.to_string().red());
                        continue;
                    }
                };
                debug!(?command, "Parsed REPL command");

                match command {
                    ReplCommand::Quit => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    ReplCommand::Help => {
                        for line in help_text() {
                            println!("{}", line.bright_black());
                        }
                    }
                    ReplCommand::Roles => print_lines(&render_capability_table()),
                    ReplCommand::Show => {
                        print_lines(&render_view(&ViewState::project(&state, &index)))
                    }
                    ReplCommand::Event(event) => {
                        let transition = state.apply(&index, event);
                        state = transition.state;
                        match render_outcome(&transition.outcome) {
                            Some(feedback) => print_lines(&[feedback]),
                            None => {
                                print_lines(&render_view(&ViewState::project(&state, &index)))
                            }
                        }
                    }
                }
                println!();
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustyline::history::DefaultHistory;

    fn complete(line: &str) -> (usize, Vec<String>) {
        let helper = CliHelper::new();
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);
        let (start, pairs) = helper.complete(line, line.len(), &ctx).unwrap();
        (start, pairs.into_iter().map(|p| p.replacement).collect())
    }

    #[test]
    fn test_completes_commands() {
        let (start, candidates) = complete("/lo");
        assert_eq!(start, 0);
        assert_eq!(candidates, vec!["/login", "/logout"]);
    }

    #[test]
    fn test_completes_roles_after_login() {
        let (start, candidates) = complete("/login ma");
        assert_eq!(start, "/login ".len());
        assert_eq!(candidates, vec!["manager"]);
    }

    #[test]
    fn test_no_completion_for_plain_text() {
        let (_, candidates) = complete("hello");
        assert!(candidates.is_empty());
    }
}
