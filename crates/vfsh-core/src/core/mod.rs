//! Core business logic for the shell.
//!
//! This module provides:
//! - [`Mount`] immutable snapshots of a real directory tree
//! - [`Session`] current-directory navigation and path resolution
//! - [`parse_input`] shell-style tokenizing and [`Command`] dispatch
//! - [`Shell`] the line-in, lines-out entry point for front-ends

mod commands;
pub mod error;
mod filesystem;
pub mod parser;
pub mod script;
mod session;
mod shell;

pub use commands::{Command, CommandResult, PathArg, execute_command};
pub use filesystem::{Mount, MountStats};
pub use parser::{ParseError, ParsedCommand, parse_input};
pub use session::{Listing, Session};
pub use shell::Shell;
