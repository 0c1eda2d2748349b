use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use build_stamp::cli::{run_stamp, StampArgs};
use build_stamp::clock::SystemClock;
use build_stamp::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "build-stamp",
    about = "Stamp build number, date, time and ID into a version file and README"
)]
struct Args {
    #[arg(help = "Version file and/or documentation file to stamp")]
    paths: Vec<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Preview the new build values without writing files")]
    dry_run: bool,

    #[arg(short, long, help = "Only print warnings and errors")]
    quiet: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("build-stamp {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let stamp_args = StampArgs {
        paths: args.paths,
        working_dir: PathBuf::from("."),
        dry_run: args.dry_run,
        quiet: args.quiet,
    };

    match run_stamp(&stamp_args, &config, &SystemClock) {
        Ok(report) => {
            ui::display_report(&report, args.quiet);
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
