//! Text terminal front-end for the shell core.

pub mod boot;
pub mod input;
mod output;

pub use output::Terminal;
