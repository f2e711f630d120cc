//! Command dispatcher.
//!
//! [`Shell`] is the seam between a front-end and the core: it takes raw
//! lines and hands back output lines. No error ever escapes it.

use tracing::debug;

use super::commands::{Command, CommandResult, execute_command};
use super::error::CommandError;
use super::filesystem::Mount;
use super::parser::parse_input;
use super::session::Session;
use crate::config::PROMPT;
use crate::models::OutputLine;

/// A single interactive session.
///
/// Holds no session navigator when the filesystem could not be mounted.
#[derive(Clone, Debug)]
pub struct Shell {
    session: Option<Session>,
}

impl Shell {
    /// Create a shell over `mount`, or a degraded one when `None`.
    pub fn new(mount: Option<Mount>) -> Self {
        Self {
            session: mount.map(Session::new),
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.session.is_some()
    }

    /// Prompt token to show before the next line.
    pub fn prompt(&self) -> &'static str {
        PROMPT
    }

    /// Tokenize and execute one raw command line.
    ///
    /// Blank lines produce nothing. Every failure becomes exactly one
    /// error line and leaves the session as it was.
    pub fn execute_line(&mut self, raw: &str) -> CommandResult {
        let parsed = match parse_input(raw) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => return CommandResult::empty(),
            Err(err) => {
                let err = CommandError::from(err);
                return CommandResult::output(vec![OutputLine::error(err.to_string())]);
            }
        };

        debug!(command = %parsed.name, args = ?parsed.args, "dispatching command");
        let result = Command::parse(&parsed.name, &parsed.args)
            .and_then(|cmd| execute_command(cmd, self.session.as_mut()));

        match result {
            Ok(result) => result,
            Err(err) => CommandResult::output(vec![format_error(&parsed.name, &err)]),
        }
    }
}

/// Render an error as a single line, prefixed by the command it came from.
fn format_error(name: &str, err: &CommandError) -> OutputLine {
    match err {
        CommandError::UnknownCommand(_) | CommandError::Parse(_) => {
            OutputLine::error(err.to_string())
        }
        _ => OutputLine::error(format!("{}: {}", name, err)),
    }
}
