//! Output line types produced by command execution.

use std::fmt;

/// A single line of shell output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputLine {
    pub data: OutputLineData,
}

/// The content of an output line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputLineData {
    /// Echoed command with the prompt it was typed at
    Command { prompt: String, input: String },
    /// Plain text output
    Text(String),
    /// Error message
    Error(String),
}

impl OutputLine {
    fn new(data: OutputLineData) -> Self {
        Self { data }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Text(s.into()))
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Error(s.into()))
    }

    pub fn command(prompt: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(OutputLineData::Command {
            prompt: prompt.into(),
            input: input.into(),
        })
    }

    /// Check if this line reports an error.
    pub fn is_error(&self) -> bool {
        matches!(self.data, OutputLineData::Error(_))
    }
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            OutputLineData::Command { prompt, input } => write!(f, "{}{}", prompt, input),
            OutputLineData::Text(s) | OutputLineData::Error(s) => f.write_str(s),
        }
    }
}
