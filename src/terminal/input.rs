//! Interactive read-eval-print loop.

use std::io::{self, BufRead, Write};

use tracing::warn;
use vfsh_core::{OutputLine, Shell};

use super::Terminal;

/// Read lines from `input` and execute them until `exit` or end of input.
///
/// With `echo` set, each line is written after the prompt so a piped
/// session reads like a typed one.
pub fn run_loop<R, W>(
    shell: &mut Shell,
    term: &mut Terminal<W>,
    input: R,
    echo: bool,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        term.show_prompt(shell.prompt())?;

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(err)) if err.kind() == io::ErrorKind::InvalidData => {
                warn!(error = %err, "discarding input line");
                term.end_line("")?;
                term.push_lines(&[OutputLine::error("error: input is not valid UTF-8")])?;
                continue;
            }
            Some(Err(err)) => return Err(err),
            None => {
                term.end_line("")?;
                return Ok(());
            }
        };

        if echo {
            term.end_line(&line)?;
        }

        let result = shell.execute_line(&line);
        term.push_lines(&result.output)?;
        if result.exit {
            return Ok(());
        }
    }
}
