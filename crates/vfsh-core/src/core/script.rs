//! Startup script runner.
//!
//! A script is plain text with one command line per line. Blank lines and
//! lines whose first non-space character is `#` are skipped; every other
//! line is echoed after the prompt and executed exactly as if typed.

use tracing::debug;

use super::commands::CommandResult;
use super::shell::Shell;
use crate::config::SCRIPT_COMMENT;
use crate::models::OutputLine;

/// Iterate the executable lines of a script as `(line_number, line)`.
///
/// Line numbers are 1-based and count skipped lines too.
pub fn script_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with(SCRIPT_COMMENT))
}

/// Run every line of `source` through `shell`, in order.
///
/// A failing line reports its error and the next line still runs. An `exit`
/// stops the script and sets [`CommandResult::exit`].
pub fn run_script(shell: &mut Shell, name: &str, source: &str) -> CommandResult {
    let mut output = vec![OutputLine::text(format!("# running: {}", name))];

    for (number, line) in script_lines(source) {
        debug!(script = name, line = number, "executing script line");
        output.push(OutputLine::command(shell.prompt(), line));

        let result = shell.execute_line(line);
        output.extend(result.output);
        if result.exit {
            debug!(script = name, line = number, "script ended the session");
            return CommandResult { output, exit: true };
        }
    }

    output.push(OutputLine::text(format!("# end of script: {}", name)));
    CommandResult::output(output)
}
