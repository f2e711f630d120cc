mod app;
mod terminal;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use app::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "vfsh")]
#[command(version, about = "Interactive shell over a read-only snapshot of a directory tree")]
struct Args {
    /// Directory to mount as the virtual filesystem root
    #[arg(long)]
    vfs_path: Option<PathBuf>,

    /// Script of commands to run once the shell is up
    #[arg(long)]
    startup_script: Option<PathBuf>,

    /// Log debug events to stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = AppConfig {
        vfs_path: args.vfs_path,
        startup_script: args.startup_script,
    };

    match app::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("vfsh: {}", err);
            ExitCode::FAILURE
        }
    }
}
