//! Data models and types for the shell.
//!
//! Contains domain types for:
//! - [`FsEntry`] - Virtual filesystem tree nodes
//! - [`OutputLine`] - Lines produced by command execution

mod filesystem;
mod terminal;

pub use filesystem::FsEntry;
pub use terminal::{OutputLine, OutputLineData};
