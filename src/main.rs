mod config;
mod error;
mod locator;
mod mover;
mod naming;
mod organizer;
mod report;
mod scanner;
mod types;

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Move large files out of your Downloads folder for review", long_about = None)]
struct Args {
    /// Move files strictly larger than this many megabytes
    #[arg(long, short = 't', default_value_t = config::DEFAULT_THRESHOLD_MB,
          value_parser = clap::value_parser!(u64).range(1..))]
    threshold_mb: u64,

    /// Name of the review folder created inside Downloads
    #[arg(long, default_value = config::DEFAULT_TARGET_FOLDER)]
    target: String,

    /// Home directory to search for Downloads (defaults to the current user's)
    #[arg(long, value_name = "DIR")]
    home: Option<PathBuf>,

    /// Show what would be moved without touching the filesystem
    #[arg(long, short = 'n')]
    dry_run: bool,

    /// Log every decision (RUST_LOG overrides this)
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let settings =
        match config::Settings::new(args.threshold_mb, &args.target, args.home, args.dry_run) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{} {e}", "Error:".red());
                std::process::exit(e.exit_code());
            }
        };
    log::debug!("{settings:?}");

    report::print_header(settings.dry_run);

    match organizer::organize_large_files(&settings) {
        Ok(run) => report::print_summary(&run),
        Err(e) => {
            eprintln!("{} {e}", "Error:".red());
            if let error::OrganizeError::DownloadsNotFound { searched, .. } = &e {
                for path in searched {
                    eprintln!("  checked: {}", path.display());
                }
            }
            std::process::exit(e.exit_code());
        }
    }
}
