//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the session navigator and returns results.

use crate::config::{FILE_SENTINEL, HELP_TEXT};
use crate::core::error::CommandError;
use crate::core::session::{Listing, Session};
use crate::models::OutputLine;

use super::{Command, CommandResult, PathArg, take_head, unique_lines};

/// Execute a parsed command and return its output.
///
/// `session` is `None` when no filesystem could be mounted; every command
/// that needs one then fails with [`CommandError::MountUnavailable`].
pub fn execute_command(
    cmd: Command,
    session: Option<&mut Session>,
) -> Result<CommandResult, CommandError> {
    match cmd {
        Command::Help => Ok(CommandResult::output(
            HELP_TEXT.lines().map(OutputLine::text).collect(),
        )),
        Command::Exit => Ok(CommandResult::exit()),
        Command::Ls(path) => execute_ls(path, mounted(session)?),
        Command::Cd(path) => {
            mounted(session)?.change_directory(path.as_ref().map_or("", PathArg::as_str))?;
            Ok(CommandResult::empty())
        }
        Command::Pwd => Ok(CommandResult::output(vec![OutputLine::text(
            mounted(session)?.current_path_string(),
        )])),
        Command::Cat(file) => {
            let lines = mounted(session)?.read_file(file.as_str())?;
            Ok(text_output(lines))
        }
        Command::Head { path, count } => {
            let lines = mounted(session)?.read_file(path.as_str())?;
            Ok(text_output(&take_head(lines, count)))
        }
        Command::Uniq(file) => {
            let lines = mounted(session)?.read_file(file.as_str())?;
            Ok(text_output(&unique_lines(lines)))
        }
    }
}

fn mounted(session: Option<&mut Session>) -> Result<&mut Session, CommandError> {
    session.ok_or(CommandError::MountUnavailable)
}

/// Execute `ls` command.
fn execute_ls(path: Option<PathArg>, session: &Session) -> Result<CommandResult, CommandError> {
    let target = path.as_ref().map_or("", PathArg::as_str);
    let output = match session.list(target)? {
        Listing::Entries(names) => names.into_iter().map(OutputLine::text).collect(),
        Listing::File => vec![OutputLine::text(FILE_SENTINEL)],
    };
    Ok(CommandResult::output(output))
}

fn text_output(lines: &[String]) -> CommandResult {
    CommandResult::output(lines.iter().map(OutputLine::text).collect())
}
