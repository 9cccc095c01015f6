use anyhow::Result;
use clap::Parser;
use tracing::error;

use cookiesweep::{print_summary, run_sweep, utils, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);

    match run_sweep(&args) {
        Ok(outcome) => {
            print_summary(&outcome, &args);
            Ok(())
        }
        Err(e) => {
            error!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
