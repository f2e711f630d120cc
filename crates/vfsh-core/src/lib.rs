//! Core of the vfsh virtual filesystem shell.
//!
//! A real directory tree is snapshotted once into an immutable [`Mount`],
//! navigated through a [`Session`], and driven by command lines passed to
//! a [`Shell`]. Everything here produces plain [`OutputLine`]s; rendering
//! them is left to the front-end.

pub mod config;
pub mod core;
pub mod models;

pub use crate::core::error::{CommandError, FsError, MountError};
pub use crate::core::{
    Command, CommandResult, Listing, Mount, MountStats, ParseError, Session, Shell, parse_input,
};
pub use models::{FsEntry, OutputLine, OutputLineData};
