//! Command execution result type.

use crate::models::OutputLine;

/// Result of executing a command.
///
/// Commands produce output lines and may ask the session to end.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<OutputLine>,
    /// The session should end after this output is shown
    pub exit: bool,
}

impl CommandResult {
    /// Create a result with just output.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            exit: false,
        }
    }

    /// Create a result that ends the session.
    pub fn exit() -> Self {
        Self {
            output: vec![],
            exit: true,
        }
    }

    /// Create an empty result (no output, session continues).
    pub fn empty() -> Self {
        Self::default()
    }
}
