//! Boot sequence logic
//!
//! Mounts the filesystem, produces the startup banner and runs the
//! startup script.

use std::fs;
use std::path::Path;

use tracing::warn;
use vfsh_core::config::{APP_NAME, APP_VERSION, ASCII_BANNER};
use vfsh_core::core::script::run_script;
use vfsh_core::{CommandResult, Mount, OutputLine, Shell};

use crate::app::AppConfig;

fn display_option(path: Option<&Path>) -> String {
    path.map_or_else(|| "(none)".to_string(), |p| p.display().to_string())
}

/// Build the shell for `config` and the banner lines to show before the
/// first prompt.
///
/// An unusable VFS path is reported in the banner; the shell then runs
/// without a filesystem.
pub fn boot(config: &AppConfig) -> (Shell, Vec<OutputLine>) {
    let mut lines: Vec<OutputLine> = ASCII_BANNER.lines().map(OutputLine::text).collect();
    lines.push(OutputLine::text(format!("{} v{}", APP_NAME, APP_VERSION)));
    lines.push(OutputLine::text(format!(
        "vfs_path = {}",
        display_option(config.vfs_path.as_deref())
    )));
    lines.push(OutputLine::text(format!(
        "startup_script = {}",
        display_option(config.startup_script.as_deref())
    )));

    let mount = match &config.vfs_path {
        Some(path) => match Mount::build(path) {
            Ok(mount) => {
                let stats = mount.stats();
                lines.push(OutputLine::text(format!(
                    "mounted {} ({} directories, {} files)",
                    mount.source().display(),
                    stats.directories,
                    stats.files
                )));
                Some(mount)
            }
            Err(err) => {
                warn!(error = %err, "mount failed");
                lines.push(OutputLine::error(format!(
                    "error: invalid VFS path {}: {}",
                    path.display(),
                    err
                )));
                None
            }
        },
        None => {
            lines.push(OutputLine::error("error: no VFS path given"));
            None
        }
    };

    lines.push(OutputLine::text("Type 'help' for available commands."));
    (Shell::new(mount), lines)
}

/// Read the startup script at `path` and run it through `shell`.
pub fn run_startup_script(shell: &mut Shell, path: &Path) -> CommandResult {
    match fs::read_to_string(path) {
        Ok(source) => run_script(shell, &path.display().to_string(), &source),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "cannot read startup script");
            CommandResult::output(vec![OutputLine::error(format!(
                "error: script not found ({})",
                path.display()
            ))])
        }
    }
}
