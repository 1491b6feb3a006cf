use clap::Parser;
use std::path::PathBuf;
use tracing::error;

use fullpath::runner::{self, logging, RunOptions};
use fullpath::SeparatorChoice;

/// Join path segments and print the result
#[derive(Parser)]
#[command(name = "fullpath", version)]
#[command(about = "Join path segments and print the full path", long_about = None)]
struct Cli {
    /// Enable verbose output on stderr (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Separator convention to join with (overrides the settings file)
    #[arg(long, value_enum)]
    separator: Option<SeparatorChoice>,

    /// Path to a TOML settings file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Segments to join (default: home/klundert document.txt)
    segments: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let opts = RunOptions {
        segments: cli.segments,
        separator: cli.separator,
        config: cli.config,
    };

    let stdout = std::io::stdout();
    if let Err(e) = runner::run(&opts, &mut stdout.lock()) {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
