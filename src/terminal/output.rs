//! Writes core output lines to a byte stream.

use std::io::{self, Write};

use vfsh_core::OutputLine;

/// Output side of the terminal.
pub struct Terminal<W: Write> {
    out: W,
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write one line, newline-terminated.
    pub fn push_output(&mut self, line: &OutputLine) -> io::Result<()> {
        writeln!(self.out, "{}", line)
    }

    /// Write every line in order, then flush.
    pub fn push_lines(&mut self, lines: &[OutputLine]) -> io::Result<()> {
        for line in lines {
            self.push_output(line)?;
        }
        self.out.flush()
    }

    /// Show the prompt without a newline so input follows it.
    pub fn show_prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()
    }

    /// Finish the current line (after a prompt or echoed input).
    pub fn end_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
