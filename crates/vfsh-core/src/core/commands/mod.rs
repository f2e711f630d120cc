//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed shell commands
//! - `CommandResult` for command execution results
//! - `execute_command` for running a command against a session
//!
//! # Architecture
//!
//! A tokenized line is turned into a `Command` by `Command::parse`, which
//! checks argument counts and numbers. `execute_command` then runs it against
//! the session navigator. Both stages report failures as `CommandError`; the
//! shell turns those into output lines.

mod execute;
mod filters;
mod result;

pub use execute::execute_command;
pub use filters::{take_head, unique_lines};
pub use result::CommandResult;

use std::fmt;

use crate::config::DEFAULT_HEAD_LINES;
use crate::core::error::CommandError;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd foo`, `cat bar.txt`).
///
/// Stored as typed; it is resolved against the mount only at execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed shell command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// List a directory; `None` lists the current one
    Ls(Option<PathArg>),
    /// Change directory; `None` stays put
    Cd(Option<PathArg>),
    Pwd,
    Cat(PathArg),
    /// Print the first `count` lines of a file
    Head { path: PathArg, count: usize },
    /// Print each distinct line once, in first-seen order
    Uniq(PathArg),
    Help,
    Exit,
}

impl Command {
    /// Get all available command names.
    pub fn names() -> &'static [&'static str] {
        &["cat", "cd", "exit", "head", "help", "ls", "pwd", "uniq"]
    }

    /// Parse command from name and arguments.
    ///
    /// Fails on an unknown name or on arguments the command cannot accept.
    pub fn parse(name: &str, args: &[String]) -> Result<Self, CommandError> {
        match name {
            "ls" => Ok(Self::Ls(optional_path(args, "too many arguments")?)),
            "cd" => Ok(Self::Cd(optional_path(args, "more than one path")?)),
            "pwd" => Ok(Self::Pwd),
            "cat" => Ok(Self::Cat(required_path(args, 1)?)),
            "head" => {
                let path = required_path(args, 2)?;
                let count = match args.get(1) {
                    Some(raw) => raw.parse().map_err(|_| {
                        CommandError::argument(format!("invalid line count '{}'", raw))
                    })?,
                    None => DEFAULT_HEAD_LINES,
                };
                Ok(Self::Head { path, count })
            }
            "uniq" => Ok(Self::Uniq(required_path(args, 1)?)),
            "help" => Ok(Self::Help),
            "exit" => Ok(Self::Exit),
            _ => Err(CommandError::UnknownCommand(name.to_string())),
        }
    }
}

/// Accept zero or one path argument.
fn optional_path(args: &[String], too_many: &str) -> Result<Option<PathArg>, CommandError> {
    match args {
        [] => Ok(None),
        [path] => Ok(Some(PathArg::new(path.as_str()))),
        _ => Err(CommandError::argument(too_many)),
    }
}

/// Require a leading path argument, allowing at most `max_args` arguments in total.
fn required_path(args: &[String], max_args: usize) -> Result<PathArg, CommandError> {
    let path = args
        .first()
        .ok_or_else(|| CommandError::argument("needs a file"))?;
    if args.len() > max_args {
        return Err(CommandError::argument("too many arguments"));
    }
    Ok(PathArg::new(path.as_str()))
}

// =============================================================================
// Tests
// =============================================================================
