//! Application configuration.
//!
//! Centralizes the constants used throughout the shell.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// ASCII banner displayed at startup.
pub const ASCII_BANNER: &str = include_str!("../assets/text/banner.txt");

/// Help text for `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the banner.
pub const APP_NAME: &str = "vfsh";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Prompt token shown before every command line.
pub const PROMPT: &str = "vfs> ";

// =============================================================================
// Filesystem Configuration
// =============================================================================

/// Content substituted for a file that could not be read as text.
pub const READ_ERROR_SENTINEL: &str = "[read error]";

/// Printed by `ls` when its target is a file.
pub const FILE_SENTINEL: &str = "(file)";

// =============================================================================
// Command Defaults
// =============================================================================

/// Line count used by `head` when none is given.
pub const DEFAULT_HEAD_LINES: usize = 10;

// =============================================================================
// Startup Script
// =============================================================================

/// Lines starting with this marker are skipped by the script runner.
pub const SCRIPT_COMMENT: char = '#';
