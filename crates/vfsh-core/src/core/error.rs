//! Error types for the shell core.
//!
//! - [`MountError`] - building a mount from a real directory
//! - [`FsError`] - resolving paths against a mount
//! - [`CommandError`] - everything a single command execution can report

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::parser::ParseError;

/// Failure to snapshot a real directory tree.
#[derive(Debug, Error)]
pub enum MountError {
    /// Root path does not exist
    #[error("path does not exist: {}", .0.display())]
    NotFound(PathBuf),
    /// Root path exists but is not a directory
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    /// Root directory could not be enumerated
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Path resolution outcomes that are not a usable node.
///
/// `path` is always the expression as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    #[error("{path}: No such file or directory")]
    NotFound { path: String },
    #[error("{path}: Not a directory")]
    NotADirectory { path: String },
    #[error("{path}: Is a directory")]
    IsADirectory { path: String },
}

impl FsError {
    pub(crate) fn not_found(path: &str) -> Self {
        Self::NotFound {
            path: path.to_string(),
        }
    }

    pub(crate) fn not_a_directory(path: &str) -> Self {
        Self::NotADirectory {
            path: path.to_string(),
        }
    }

    pub(crate) fn is_a_directory(path: &str) -> Self {
        Self::IsADirectory {
            path: path.to_string(),
        }
    }
}

/// Anything a single command line can fail with.
///
/// Every variant is reported as one output line and never ends the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Fs(#[from] FsError),
    #[error("{0}")]
    Argument(String),
    #[error("no filesystem mounted")]
    MountUnavailable,
    #[error("Command not found: {0}. Type 'help' for available commands.")]
    UnknownCommand(String),
}

impl CommandError {
    pub(crate) fn argument(msg: impl Into<String>) -> Self {
        Self::Argument(msg.into())
    }
}
