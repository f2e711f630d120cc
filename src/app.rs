//! Root application module.
//!
//! Wires the boot sequence, the startup script and the interactive loop
//! together over stdin/stdout.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use crate::terminal::{Terminal, boot, input};

/// Startup options, as given on the command line.
#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    /// Directory to mount; `None` starts a shell without a filesystem
    pub vfs_path: Option<PathBuf>,
    /// Script to run after the banner
    pub startup_script: Option<PathBuf>,
}

/// Run a full session until `exit` or end of input.
///
/// A closed stdout (e.g. piping into `head`) ends the session quietly.
pub fn run(config: AppConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let echo = !stdin.is_terminal();
    let mut term = Terminal::new(io::stdout().lock());

    match run_session(&config, &mut term, stdin.lock(), echo) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

fn run_session<R, W>(
    config: &AppConfig,
    term: &mut Terminal<W>,
    input: R,
    echo: bool,
) -> io::Result<()>
where
    R: io::BufRead,
    W: io::Write,
{
    let (mut shell, banner) = boot::boot(config);
    term.push_lines(&banner)?;

    if let Some(script) = &config.startup_script {
        term.show_prompt(shell.prompt())?;
        let result = boot::run_startup_script(&mut shell, script);
        term.push_lines(&result.output)?;
        if result.exit {
            return Ok(());
        }
    }

    input::run_loop(&mut shell, term, input, echo)
}
